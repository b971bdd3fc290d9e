mod common;

use common::closed_port_url;
use gen3d::{
    print_outcome, GenClient, GenError, Generate3dRequest, GenerationResponse, ImageSource,
};
use reqwest::StatusCode;

fn render(result: &Result<GenerationResponse, GenError>) -> (String, String) {
    let mut out = Vec::new();
    let mut err = Vec::new();
    print_outcome(result, &mut out, &mut err).unwrap();
    (
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}

#[test]
fn test_success_prints_viewer_url() {
    let result = Ok(GenerationResponse {
        drive_folder_id: "ABC123".to_string(),
        message: None,
    });

    let (out, err) = render(&result);
    assert_eq!(
        out,
        "3D assets generated successfully.\n\
         Google Drive Folder ID: ABC123\n\
         View Files: https://drive.google.com/drive/folders/ABC123\n"
    );
    assert!(err.is_empty());
}

#[test]
fn test_success_prefers_server_message() {
    let result = Ok(GenerationResponse {
        drive_folder_id: "IMG42".to_string(),
        message: Some("Image generated successfully".to_string()),
    });

    let (out, _) = render(&result);
    assert!(out.starts_with("Image generated successfully\n"));
}

#[test]
fn test_server_error_prints_message_only() {
    let result = Err(GenError::ApiError {
        status: StatusCode::INTERNAL_SERVER_ERROR,
        message: "bad image".to_string(),
    });

    let (out, err) = render(&result);
    assert!(out.is_empty());
    assert_eq!(err, "Error: bad image\n");
    assert!(!err.contains("Folder"));
}

#[tokio::test]
async fn test_transport_failure_prints_cause() {
    let client = GenClient::new_with_url(&closed_port_url()).unwrap();
    let request = Generate3dRequest::new("Test Product", 123, ImageSource::bytes("x.png", b"png"));

    let result = client.generate_3d(request).await;
    assert!(matches!(result, Err(GenError::RequestFailed(_))));

    let (out, err) = render(&result);
    assert!(out.is_empty());
    assert!(err.starts_with("Error: Network request failed"));
}
