use crate::image_classifier::error::ImageClassifierError;
use crate::image_classifier::interpreter::interface::{TensorData, TensorDataMut};
use image::DynamicImage;
use std::borrow::Cow;

/// Copies an image, already resized to the model's input size, into the input
/// tensor. The image is first brought to 8 bits and `channels` interleaved
/// channels, keeping the image's own channel order.
///
/// `uint8` tensors receive the pixel bytes as they are. `float32` tensors
/// receive every channel byte widened to a float in the 0..=255 range.
pub fn pack(
    image: &DynamicImage,
    channels: usize,
    tensor: TensorDataMut<'_>,
) -> Result<(), ImageClassifierError> {
    let image = with_channels(image, channels);
    let bytes = image.as_bytes();

    match tensor {
        TensorDataMut::UInt8(data) => {
            check_len(data.len(), bytes.len())?;
            data.copy_from_slice(bytes);
        }
        TensorDataMut::Float32(data) => {
            check_len(data.len(), bytes.len())?;
            for (value, byte) in data.iter_mut().zip(bytes) {
                *value = f32::from(*byte);
            }
        }
        TensorDataMut::Unsupported(name) => {
            return Err(ImageClassifierError::UnsupportedTensorType(name));
        }
    }

    Ok(())
}

/// Reads the first `count` output values as probabilities. `uint8` values are
/// scaled by 1/255, `float32` values are taken as they are.
pub fn unpack(tensor: TensorData<'_>, count: usize) -> Result<Vec<f32>, ImageClassifierError> {
    match tensor {
        TensorData::UInt8(data) => {
            check_available(data.len(), count)?;
            Ok(data[..count]
                .iter()
                .map(|value| f32::from(*value) / f32::from(u8::MAX))
                .collect())
        }
        TensorData::Float32(data) => {
            check_available(data.len(), count)?;
            Ok(data[..count].to_vec())
        }
        TensorData::Unsupported(name) => Err(ImageClassifierError::UnsupportedTensorType(name)),
    }
}

/// Images already in the requested 8-bit layout are used as they are.
/// Channel counts other than 1, 2 and 4 get RGB.
fn with_channels(image: &DynamicImage, channels: usize) -> Cow<'_, DynamicImage> {
    match (channels, image) {
        (1, DynamicImage::ImageLuma8(_))
        | (2, DynamicImage::ImageLumaA8(_))
        | (4, DynamicImage::ImageRgba8(_)) => Cow::Borrowed(image),
        (1, _) => Cow::Owned(DynamicImage::ImageLuma8(image.to_luma8())),
        (2, _) => Cow::Owned(DynamicImage::ImageLumaA8(image.to_luma_alpha8())),
        (4, _) => Cow::Owned(DynamicImage::ImageRgba8(image.to_rgba8())),
        (_, DynamicImage::ImageRgb8(_)) => Cow::Borrowed(image),
        _ => Cow::Owned(DynamicImage::ImageRgb8(image.to_rgb8())),
    }
}

fn check_len(expected: usize, actual: usize) -> Result<(), ImageClassifierError> {
    if expected != actual {
        return Err(ImageClassifierError::TensorSizeMismatch { expected, actual });
    }
    Ok(())
}

fn check_available(available: usize, count: usize) -> Result<(), ImageClassifierError> {
    if available < count {
        return Err(ImageClassifierError::TensorSizeMismatch {
            expected: count,
            actual: available,
        });
    }
    Ok(())
}
