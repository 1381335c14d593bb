use serde_json::{json, Value};

pub const MULTIPART_BOUNDARY: &str = "article-test-boundary";

/// Valid creation body with the given title.
pub fn valid_article_body(title: &str) -> Value {
    json!({
        "title": title,
        "description": "Lorum ipsum",
        "expirationDate": "2030-01-01T00:00:00Z",
    })
}

/// A minimal valid 1x1 PNG.
pub fn png_bytes() -> Vec<u8> {
    vec![
        0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, // PNG signature
        0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44, 0x52, // IHDR chunk
        0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, // 1x1 dimensions
        0x08, 0x02, 0x00, 0x00, 0x00, 0x90, 0x77, 0x53, 0xDE, //
        0x00, 0x00, 0x00, 0x0C, 0x49, 0x44, 0x41, 0x54, // IDAT chunk
        0x08, 0xD7, 0x63, 0xF8, 0x00, 0x00, 0x00, 0x00, 0x01, 0x00, 0x01, //
        0x00, 0x18, 0xDD, 0x8D, 0x89, 0x00, 0x00, 0x00, 0x00, 0x49, 0x45, //
        0x4E, 0x44, 0xAE, 0x42, 0x60, 0x82, // IEND chunk
    ]
}

/// Multipart body carrying one file under the standard `file` field.
pub fn multipart_file(file_name: &str, data: &[u8]) -> (String, Vec<u8>) {
    multipart_field("file", file_name, data)
}

/// Multipart body carrying one file under an arbitrary field name.
pub fn multipart_field(field: &str, file_name: &str, data: &[u8]) -> (String, Vec<u8>) {
    let mut body = Vec::new();
    body.extend_from_slice(
        format!(
            "--{}\r\nContent-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\nContent-Type: application/octet-stream\r\n\r\n",
            MULTIPART_BOUNDARY, field, file_name
        )
        .as_bytes(),
    );
    body.extend_from_slice(data);
    body.extend_from_slice(format!("\r\n--{}--\r\n", MULTIPART_BOUNDARY).as_bytes());

    let content_type = format!("multipart/form-data; boundary={}", MULTIPART_BOUNDARY);
    (content_type, body)
}
