use crate::backend::ComputeBackend;
use crate::error::{Result, TensorError};

/// Pure-Rust CPU compute backend.
///
/// Implements all kernels with straightforward loops optimized for
/// correctness rather than peak performance. Intended as a reference
/// implementation.
#[derive(Debug, Clone)]
pub struct CpuBackend;

impl CpuBackend {
    pub fn new() -> Self {
        CpuBackend
    }
}

impl Default for CpuBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl ComputeBackend for CpuBackend {
    fn name(&self) -> &str {
        "cpu"
    }

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
    ) -> Result<Vec<f32>> {
        if input.len() != in_w * in_h * in_c {
            return Err(TensorError::Other(format!(
                "conv2d: input.len()={} but expected in_w*in_h*in_c={}",
                input.len(),
                in_w * in_h * in_c
            )));
        }
        if weights.len() != out_c * k_w * k_h * in_c {
            return Err(TensorError::Other(format!(
                "conv2d: weights.len()={} but expected out_c*k_w*k_h*in_c={}",
                weights.len(),
                out_c * k_w * k_h * in_c
            )));
        }
        if bias.len() != out_c {
            return Err(TensorError::Other(format!(
                "conv2d: bias.len()={} but expected out_c={}",
                bias.len(),
                out_c
            )));
        }

        let mut out = vec![0.0f32; out_w * out_h * out_c];
        for o in 0..out_c {
            for x in 0..out_w {
                for y in 0..out_h {
                    let mut acc = bias[o];
                    for kx in 0..k_w {
                        let ix = (x * stride + kx) as isize - pad as isize;
                        if ix < 0 || ix >= in_w as isize {
                            continue;
                        }
                        for ky in 0..k_h {
                            let iy = (y * stride + ky) as isize - pad as isize;
                            if iy < 0 || iy >= in_h as isize {
                                continue;
                            }
                            let in_base = (ix as usize * in_h + iy as usize) * in_c;
                            let w_base = ((o * k_w + kx) * k_h + ky) * in_c;
                            for c in 0..in_c {
                                acc += input[in_base + c] * weights[w_base + c];
                            }
                        }
                    }
                    out[(x * out_h + y) * out_c + o] = acc;
                }
            }
        }
        Ok(out)
    }

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
    ) -> Result<Vec<f32>> {
        if input.len() != in_w * in_h * channels {
            return Err(TensorError::Other(format!(
                "maxpool2d: input.len()={} but expected in_w*in_h*channels={}",
                input.len(),
                in_w * in_h * channels
            )));
        }

        let mut out = vec![0.0f32; out_w * out_h * channels];
        for c in 0..channels {
            for x in 0..out_w {
                for y in 0..out_h {
                    let mut max = f32::NEG_INFINITY;
                    for kx in 0..k_w {
                        let ix = x * stride_w + kx;
                        if ix >= in_w {
                            continue;
                        }
                        for ky in 0..k_h {
                            let iy = y * stride_h + ky;
                            if iy >= in_h {
                                continue;
                            }
                            let v = input[(ix * in_h + iy) * channels + c];
                            if v > max {
                                max = v;
                            }
                        }
                    }
                    out[(x * out_h + y) * channels + c] = max;
                }
            }
        }
        Ok(out)
    }

    fn matmul(&self, a: &[f32], b: &[f32], m: usize, k: usize, n: usize) -> Result<Vec<f32>> {
        if a.len() != m * k {
            return Err(TensorError::Other(format!(
                "matmul: a.len()={} but expected m*k={}",
                a.len(),
                m * k
            )));
        }
        if b.len() != k * n {
            return Err(TensorError::Other(format!(
                "matmul: b.len()={} but expected k*n={}",
                b.len(),
                k * n
            )));
        }

        let mut c = vec![0.0f32; m * n];
        for i in 0..m {
            for j in 0..n {
                let mut sum = 0.0f32;
                for p in 0..k {
                    sum += a[i * k + p] * b[p * n + j];
                }
                c[i * n + j] = sum;
            }
        }
        Ok(c)
    }

    fn bias_add(&self, a: &[f32], bias: &[f32]) -> Result<Vec<f32>> {
        if a.len() != bias.len() {
            return Err(TensorError::ShapeMismatch {
                expected: vec![a.len()],
                got: vec![bias.len()],
            });
        }
        Ok(a.iter().zip(bias.iter()).map(|(x, b)| x + b).collect())
    }

    fn relu(&self, x: &[f32]) -> Result<Vec<f32>> {
        Ok(x.iter().map(|&v| v.max(0.0)).collect())
    }

    fn softmax(&self, x: &[f32], n: usize) -> Result<Vec<f32>> {
        if n == 0 {
            return Err(TensorError::Other("softmax: n must be > 0".to_string()));
        }
        if x.len() % n != 0 {
            return Err(TensorError::Other(format!(
                "softmax: x.len()={} is not a multiple of n={}",
                x.len(),
                n
            )));
        }

        let n_chunks = x.len() / n;
        let mut result = vec![0.0f32; x.len()];

        for chunk in 0..n_chunks {
            let offset = chunk * n;
            let chunk_data = &x[offset..offset + n];

            let max_val = chunk_data.iter().copied().fold(f32::NEG_INFINITY, f32::max);

            let mut sum = 0.0f32;
            for i in 0..n {
                let e = (chunk_data[i] - max_val).exp();
                result[offset + i] = e;
                sum += e;
            }

            for i in 0..n {
                result[offset + i] /= sum;
            }
        }

        Ok(result)
    }
}
