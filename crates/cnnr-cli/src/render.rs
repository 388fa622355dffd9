use cnnr_pipeline::demo::SAMPLE_DIM;

// ASCII grayscale ramp, darkest first.
const RAMP: &[u8] =
    b"@B%8&WM#*oahkbdpqwmZO0QLCJUYXzcvunxrjft/\\|()1{}[]?-_+~<>i!lI;:,\"^`'.   ";

/// Render a (28, 28, 1) sample as ASCII art, two characters per pixel.
pub fn ascii_digit(pixels: &[f32]) -> String {
    let mut out = String::with_capacity(SAMPLE_DIM * (SAMPLE_DIM * 2 + 1));
    for y in 0..SAMPLE_DIM {
        for x in 0..SAMPLE_DIM {
            let index = if pixels[y * SAMPLE_DIM + x] > 0.6 {
                RAMP.len() - 3
            } else {
                0
            };
            let ch = RAMP[index] as char;
            out.push(ch);
            out.push(ch);
        }
        out.push('\n');
    }
    out
}
