use actix_web::{get, web, HttpResponse, Responder};
use rust_embed::RustEmbed;

const INDEX: &str = "index.html";

#[derive(RustEmbed)]
#[folder = "$CARGO_MANIFEST_DIR/../frontend/dist"]
struct Assets;

/// Serves the trunk build of the pairing form.
#[get("/{filename:.*}")]
pub async fn assets(filename: web::Path<String>) -> impl Responder {
    let filename = match filename.as_str() {
        "" => INDEX,
        filename => filename,
    };

    match Assets::get(filename) {
        Some(content) => {
            let mime_type = mime_guess::from_path(filename).first_or_text_plain();
            log::debug!("Serving {} as {}", filename, mime_type);
            HttpResponse::Ok()
                .content_type(mime_type.as_ref())
                .body(content.data.into_owned())
        }
        None => {
            log::debug!("Asset not found: {}", filename);
            HttpResponse::NotFound().body("404 - Not Found")
        }
    }
}
