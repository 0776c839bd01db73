/// An error type for the io module.
#[derive(thiserror::Error, Debug)]
pub enum IoError {
    /// Error when the file does not exist.
    #[error("File does not exist: {0}")]
    FileDoesNotExist(std::path::PathBuf),

    /// Invalid file extension.
    #[error("File does not have a valid extension: {0}")]
    InvalidFileExtension(std::path::PathBuf),

    /// Error to open the file.
    #[error("Failed to manipulate the file. {0}")]
    FileError(#[from] std::io::Error),

    /// Error to create the picture.
    #[error("Failed to create picture. {0}")]
    PictureCreationError(#[from] picblur_image::PictureError),

    /// Error from the image codec while decoding or encoding.
    #[error("Failed to decode or encode the image. {0}")]
    CodecError(#[from] image::ImageError),

    /// The picture dimensions do not fit the codec.
    #[error("Picture of {0}x{1} pixels is too large to encode")]
    PictureTooLarge(usize, usize),

    /// The codec has no representation for the picture colour mode.
    #[error("Colour mode {0} cannot be encoded")]
    UnsupportedMode(String),
}
