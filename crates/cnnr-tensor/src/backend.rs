use std::fmt::Debug;

use crate::error::Result;

/// Trait for the primitive numeric kernels consumed by the pipeline.
///
/// All operations are pure functions over f32 slices with explicit
/// dimension parameters, returning owned result buffers. Kernels perform no
/// layout conversion and hold no state: the caller supplies arguments that
/// are already in the layout documented per method.
///
/// Spatial buffers use the flat index `(x * height + y) * channels + c`
/// (channel-last).
pub trait ComputeBackend: Send + Sync + Debug {
    /// Returns the name of this backend (e.g., "cpu").
    fn name(&self) -> &str;

    /// 2-D convolution over a channel-last input.
    ///
    /// - `input`: shape (in_w, in_h, in_c)
    /// - `weights`: channel-last layout `[out_c, k_w, k_h, in_c]`
    /// - `bias`: one value per output channel, length `out_c`
    /// - `stride` / `pad`: applied identically to both spatial axes
    /// - `out_w` / `out_h`: output spatial dimensions, computed by the caller
    ///
    /// Returns a buffer of shape (out_w, out_h, out_c).
    #[allow(clippy::too_many_arguments)]
    fn conv2d(
        &self,
        input: &[f32],
        weights: &[f32],
        bias: &[f32],
        in_w: usize,
        in_h: usize,
        in_c: usize,
        out_c: usize,
        k_w: usize,
        k_h: usize,
        stride: usize,
        pad: usize,
        out_w: usize,
        out_h: usize,
    ) -> Result<Vec<f32>>;

    /// 2-D max pooling with zero padding, channel count unchanged.
    ///
    /// Returns a buffer of shape (out_w, out_h, channels).
    #[allow(clippy::too_many_arguments)]
    fn maxpool2d(
        &self,
        input: &[f32],
        in_w: usize,
        in_h: usize,
        channels: usize,
        k_w: usize,
        k_h: usize,
        stride_w: usize,
        stride_h: usize,
        out_w: usize,
        out_h: usize,
    ) -> Result<Vec<f32>>;

    /// Matrix multiplication: C = A @ B.
    ///
    /// - `a`: row-major data of shape [m, k]
    /// - `b`: row-major data of shape [k, n]
    /// - Returns: row-major data of shape [m, n]
    fn matmul(&self, a: &[f32], b: &[f32], m: usize, k: usize, n: usize) -> Result<Vec<f32>>;

    /// Element-wise addition of a bias vector: result[i] = a[i] + bias[i].
    fn bias_add(&self, a: &[f32], bias: &[f32]) -> Result<Vec<f32>>;

    /// Rectified-linear activation: result[i] = max(x[i], 0).
    fn relu(&self, x: &[f32]) -> Result<Vec<f32>>;

    /// Softmax over chunks of `n` elements.
    ///
    /// For each chunk: result[i] = exp(x[i] - max(x)) / sum(exp(x[j] - max(x))).
    /// The max subtraction keeps the exponentials overflow-safe.
    fn softmax(&self, x: &[f32], n: usize) -> Result<Vec<f32>>;
}
