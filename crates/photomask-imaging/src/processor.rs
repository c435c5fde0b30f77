// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Image processor: owns one normalized single-channel float buffer and
// transforms it in place: threshold, 3x3 convolution, Sobel edges, binary
// morphology, median filtering and locally adaptive thresholding.

use image::{DynamicImage, GrayImage};
use photomask_core::{
    Border, ConvolutionMode, EdgeDirection, MorphOp, PhotomaskError, ProcessorConfig, Result,
};
use tracing::{debug, info, instrument, warn};

use crate::buffer::{self, FloatImage};
use crate::filters::{self, morphology};

/// Border policy for 3x3 convolution.
pub const CONVOLUTION_BORDER: Border = Border::Reflect101;

/// Filtering pipeline over a single in-memory intensity image.
///
/// Every sample is an `f32`; right after construction all samples lie in
/// [0, 1]. Operations replace the buffer with their result and never change its
/// dimensions. Callers read results through [`ImageProcessor::get_image`].
///
/// ```ignore
/// let mut processor = ImageProcessor::open("panel.jpg")?;
/// processor.perform_convolution(ConvolutionMode::Smoothing);
/// processor.perform_threshold(0.3);
/// let mask = processor.get_image();
/// ```
#[derive(Debug, Clone)]
pub struct ImageProcessor {
    /// The current working buffer.
    image: FloatImage,
    /// Kernels fixed for the lifetime of the processor.
    config: ProcessorConfig,
}

impl ImageProcessor {
    // -- Construction ---------------------------------------------------------

    /// Load an image from a file path and reduce it to one normalized channel.
    pub fn open(path: impl AsRef<std::path::Path>) -> Result<Self> {
        Self::open_with_config(path, ProcessorConfig::default())
    }

    /// [`ImageProcessor::open`] with an explicit kernel configuration.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn open_with_config(
        path: impl AsRef<std::path::Path>,
        config: ProcessorConfig,
    ) -> Result<Self> {
        let img = image::open(path.as_ref()).map_err(|err| {
            PhotomaskError::Load(format!("{}: {}", path.as_ref().display(), err))
        })?;
        info!(
            width = img.width(),
            height = img.height(),
            color = ?img.color(),
            "Image loaded"
        );
        Self::from_dynamic_with_config(img, config)
    }

    /// Decode an in-memory encoded image (PNG, JPEG, ...).
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        Self::from_bytes_with_config(data, ProcessorConfig::default())
    }

    /// [`ImageProcessor::from_bytes`] with an explicit kernel configuration.
    #[instrument(skip(data, config), fields(data_len = data.len()))]
    pub fn from_bytes_with_config(data: &[u8], config: ProcessorConfig) -> Result<Self> {
        let img = image::load_from_memory(data)
            .map_err(|err| PhotomaskError::Load(format!("failed to decode image: {}", err)))?;
        debug!(
            width = img.width(),
            height = img.height(),
            "Image decoded from bytes"
        );
        Self::from_dynamic_with_config(img, config)
    }

    /// Wrap an already-decoded image of any channel layout.
    ///
    /// Fails with [`PhotomaskError::InvalidParameter`] for an empty image or
    /// non-finite float samples.
    pub fn from_dynamic(image: DynamicImage) -> Result<Self> {
        Self::from_dynamic_with_config(image, ProcessorConfig::default())
    }

    /// [`ImageProcessor::from_dynamic`] with an explicit kernel configuration.
    pub fn from_dynamic_with_config(image: DynamicImage, config: ProcessorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            image: buffer::normalize_dynamic(&image)?,
            config,
        })
    }

    /// Wrap row-major samples that are already normalized to [0, 1].
    pub fn from_samples(width: u32, height: u32, samples: Vec<f32>) -> Result<Self> {
        Self::from_samples_with_config(width, height, samples, ProcessorConfig::default())
    }

    /// [`ImageProcessor::from_samples`] with an explicit kernel configuration.
    pub fn from_samples_with_config(
        width: u32,
        height: u32,
        samples: Vec<f32>,
        config: ProcessorConfig,
    ) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            image: buffer::from_samples(width, height, samples)?,
            config,
        })
    }

    /// Wrap an existing float buffer, clamping it into [0, 1].
    pub fn from_float_image(image: FloatImage) -> Result<Self> {
        Self::from_float_image_with_config(image, ProcessorConfig::default())
    }

    /// [`ImageProcessor::from_float_image`] with an explicit kernel configuration.
    pub fn from_float_image_with_config(image: FloatImage, config: ProcessorConfig) -> Result<Self> {
        let (width, height) = image.dimensions();
        Self::from_samples_with_config(width, height, image.into_raw(), config)
    }

    // -- Accessors ------------------------------------------------------------

    /// Independent copy of the current buffer.
    pub fn get_image(&self) -> FloatImage {
        self.image.clone()
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    /// Borrow the current samples, row-major.
    pub fn samples(&self) -> &[f32] {
        self.image.as_raw()
    }

    pub fn config(&self) -> &ProcessorConfig {
        &self.config
    }

    /// Consume the processor and return the buffer.
    pub fn into_image(self) -> FloatImage {
        self.image
    }

    /// 8-bit rendition of the current buffer for a viewer.
    pub fn to_gray8(&self) -> GrayImage {
        buffer::to_gray8(&self.image)
    }

    // -- Operations (mutate in place) -----------------------------------------

    /// Binarize at `threshold`: 1.0 where `sample >= threshold`, else 0.0.
    ///
    /// No range check: thresholds outside [0, 1] give an all-0 or all-1 buffer.
    #[instrument(skip(self))]
    pub fn perform_threshold(&mut self, threshold: f32) {
        info!(threshold, "Applying global threshold");
        filters::threshold::threshold_mut(&mut self.image, threshold);
        debug!(
            foreground = buffer::foreground_count(&self.image),
            "Threshold complete"
        );
    }

    /// Convolve with the smoothing or sharpening kernel (reflect-101 border).
    ///
    /// Sharpened output is not clamped.
    #[instrument(skip(self))]
    pub fn perform_convolution(&mut self, mode: ConvolutionMode) {
        let kernel = self.config.kernel(mode);
        info!(%mode, "Applying 3x3 convolution");
        self.image = filters::convolve3x3(&self.image, kernel, CONVOLUTION_BORDER);
    }

    /// Replace the buffer with the rescaled Sobel gradient magnitude.
    #[instrument(skip(self))]
    pub fn perform_sobel_edge_detection(&mut self, direction: EdgeDirection) {
        info!(%direction, "Running Sobel edge detection");
        self.image = filters::sobel(&self.image, direction);
    }

    /// Binarize a copy at `threshold`, then dilate or erode it `count` times,
    /// or take its morphological gradient (ignoring `count`).
    #[instrument(skip(self))]
    pub fn perform_morphological_operation(&mut self, op: MorphOp, count: u32, threshold: f32) {
        info!(%op, count, threshold, "Applying morphological operation");
        let binary = filters::threshold(&self.image, threshold);
        let result = match op {
            MorphOp::Dilate => morphology::iterate(&binary, count, filters::dilate),
            MorphOp::Erode => morphology::iterate(&binary, count, filters::erode),
            MorphOp::Gradient => filters::morphological_gradient(&binary),
        };
        debug!(
            before = buffer::foreground_count(&binary),
            after = buffer::foreground_count(&result),
            "Morphology complete"
        );
        self.image = result;
    }

    /// Median-filter with a `kernel_size` x `kernel_size` window.
    ///
    /// An even or zero size is rejected with
    /// [`PhotomaskError::InvalidParameter`]; the buffer is then unchanged.
    #[must_use = "a rejected kernel size leaves the image untouched"]
    #[instrument(skip(self))]
    pub fn perform_median_filtering(&mut self, kernel_size: u32) -> Result<()> {
        match filters::median_filter(&self.image, kernel_size) {
            Ok(filtered) => {
                info!(kernel_size, "Median filter applied");
                self.image = filtered;
                Ok(())
            }
            Err(err) => {
                warn!(kernel_size, error = %err, "Median filter rejected; image unchanged");
                Err(err)
            }
        }
    }

    /// Threshold each sample against its 5x5 local mean shifted by
    /// `bias - 1.0`.
    #[instrument(skip(self))]
    pub fn perform_locally_adaptive_threshold(&mut self, bias: f32) {
        info!(
            bias,
            block_size = filters::ADAPTIVE_BLOCK_SIZE,
            "Applying locally adaptive threshold"
        );
        self.image = filters::adaptive_threshold(&self.image, bias);
        debug!(
            foreground = buffer::foreground_count(&self.image),
            "Adaptive threshold complete"
        );
    }
}

// -- Tests --------------------------------------------------------------------
