use thiserror::Error;

/// All errors that the crate can generate
#[derive(Error, Debug)]
pub enum PDFError {
    #[error(transparent)]
    /// An I/O error occurred
    Io(#[from] std::io::Error),

    #[error(transparent)]
    /// [image] failed to parse the image
    Image(#[from] image::ImageError),

    #[error(transparent)]
    /// A quote or configuration file was not valid JSON for its schema
    Json(#[from] serde_json::Error),

    #[error("page {0} is listed in the page order but missing from the document")]
    /// The page order refers to a page that is not in the page arena
    PageMissing(usize),

    #[error("a reference to {0} was used before it was generated")]
    /// An object was referred to before its reference was generated
    MissingReference(&'static str),
}
