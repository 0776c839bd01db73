use approx::assert_abs_diff_eq;
use rand::{rngs::StdRng, Rng, SeedableRng};

use picblur_image::{ColorMode, Picture, PictureError, PictureSize, PixelGrid};
use picblur_imgproc::{
    filter::{blur, blur_with_options, convolve, kernels, BlurExt, BlurOptions, BorderMode},
    normalize::{channel_range, normalize},
    parallel::ExecutionStrategy,
};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn random_picture(mode: ColorMode, size: PictureSize, seed: u64) -> Result<Picture, PictureError> {
    let mut rng = StdRng::seed_from_u64(seed);
    let channels = mode.channels();
    let data = (0..size.width * size.height * channels)
        .map(|i| {
            let (min, max) = channel_range(mode, i % channels);
            rng.random_range(min..=max)
        })
        .collect();
    Picture::new(PixelGrid::new(size, channels, data)?, mode)
}

#[test]
fn blur_every_mode_stays_in_range() -> Result<(), PictureError> {
    init_logger();
    let size = PictureSize {
        width: 13,
        height: 7,
    };
    for (seed, mode) in ColorMode::ALL.into_iter().enumerate() {
        let src = random_picture(mode, size, seed as u64)?;
        let dst = blur(&src, 4)?;

        assert_eq!(dst.size(), size);
        assert_eq!(dst.mode(), mode);
        for pixel in dst.pixels().as_slice().chunks_exact(mode.channels()) {
            for (k, &v) in pixel.iter().enumerate() {
                let (min, max) = channel_range(mode, k);
                assert!(v >= min && v <= max, "{mode} channel {k}: {v}");
            }
        }

        // a blurred picture is already normalized
        let mut again = dst.clone();
        normalize(&mut again)?;
        assert_eq!(again, dst, "{mode}");
    }
    Ok(())
}

#[test]
fn blur_rgba_keeps_alpha() -> Result<(), PictureError> {
    init_logger();
    let src = random_picture(
        ColorMode::Rgba,
        PictureSize {
            width: 9,
            height: 9,
        },
        7,
    )?;
    let mut expected = src.clone();
    normalize(&mut expected)?;

    let convolved = convolve(src.pixels(), &kernels::gaussian_kernel_2d(5)?, ColorMode::Rgba)?;
    for (s, d) in src.pixels().as_slice().chunks(4).zip(convolved.as_slice().chunks(4)) {
        assert_eq!(s[3].to_bits(), d[3].to_bits());
    }

    let dst = src.blur(5)?;
    for (e, d) in expected.pixels().as_slice().chunks(4).zip(dst.pixels().as_slice().chunks(4)) {
        assert_eq!(e[3], d[3]);
    }
    Ok(())
}

#[test]
fn blur_uniform_field_interior() -> Result<(), PictureError> {
    let size = PictureSize {
        width: 15,
        height: 15,
    };
    let src = Picture::new(PixelGrid::from_size_val(size, 3, 0.5)?, ColorMode::Hsv)?;
    let convolved = convolve(src.pixels(), &kernels::gaussian_kernel_2d(7)?, ColorMode::Hsv)?;
    for r in 3..12 {
        for c in 3..12 {
            for k in 0..3 {
                assert_abs_diff_eq!(
                    convolved.get(r, c, k).unwrap_or_default(),
                    0.5,
                    epsilon = 1e-9
                );
            }
        }
    }
    Ok(())
}

#[test]
fn blur_strategies_and_borders() -> Result<(), PictureError> {
    init_logger();
    let src = random_picture(
        ColorMode::Lab,
        PictureSize {
            width: 31,
            height: 19,
        },
        3,
    )?;

    for border in [BorderMode::Exclude, BorderMode::Replicate, BorderMode::Renormalize] {
        let serial = blur_with_options(
            &src,
            6,
            &BlurOptions {
                border,
                strategy: ExecutionStrategy::Serial,
            },
        )?;
        let parallel = blur_with_options(
            &src,
            6,
            &BlurOptions {
                border,
                strategy: ExecutionStrategy::Parallel,
            },
        )?;
        assert_eq!(serial, parallel, "{border:?}");
    }

    assert_eq!(
        blur_with_options(
            &src,
            3,
            &BlurOptions {
                strategy: ExecutionStrategy::Fixed(0),
                ..Default::default()
            }
        ),
        Err(PictureError::InvalidThreadCount(0))
    );
    Ok(())
}

#[test]
fn blur_white_square_edges() -> Result<(), PictureError> {
    let size = PictureSize {
        width: 5,
        height: 5,
    };
    let src = Picture::new(PixelGrid::from_size_val(size, 3, 255.0)?, ColorMode::Rgb)?;
    let dst = blur(&src, 3)?;

    // corners lose more weight than the middle of an edge
    let corner = dst.pixels().get(0, 0, 0).unwrap_or_default();
    let edge = dst.pixels().get(0, 2, 0).unwrap_or_default();
    let center = dst.pixels().get(2, 2, 0).unwrap_or_default();
    assert!(corner < edge && edge < center);
    assert_eq!(center, 255.0);
    Ok(())
}
