#![doc = env!("CARGO_PKG_DESCRIPTION")]

#[doc(inline)]
pub use picblur_image as image;

#[doc(inline)]
pub use picblur_imgproc as imgproc;

#[doc(inline)]
pub use picblur_io as io;

pub use picblur_image::{ColorMode, Picture, PictureError, PictureSize, PixelGrid};
pub use picblur_imgproc::filter::{blur, BlurExt, BlurOptions, BorderMode};
