//! Synthetic barcode rendering
//!
//! The reference tables applied in reverse: a 12-digit payload becomes a
//! 95-module bar pattern, then a P6 raster. Fixtures for tests, benches and
//! the CLI all come from here, optionally with deterministic luminance and
//! bar-boundary jitter to imitate a cheap sensor.

use crate::decoder::checksum::check_digit;
use crate::decoder::tables::{LEFT_EVEN, LEFT_ODD, RIGHT, parity_pattern_for_digit};
use crate::signal::Bit;

/// Modules in a full symbol: 3 + 42 + 5 + 42 + 3
pub const MODULE_COUNT: usize = 95;

/// Rendering knobs for synthetic rasters
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    /// Pixels per module
    pub module_width: usize,
    /// Raster height in rows
    pub height: usize,
    /// Light pixels padding each side
    pub quiet_zone: usize,
    /// Max luminance jitter as a percentage of full scale (0 disables)
    pub luma_jitter: u8,
    /// Shift bar boundaries by up to one pixel
    pub edge_jitter: bool,
    /// Seed for the deterministic noise generator
    pub seed: u64,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            module_width: 6,
            height: 8,
            quiet_zone: 12,
            luma_jitter: 0,
            edge_jitter: false,
            seed: 1,
        }
    }
}

/// Deterministic noise source so fixtures are reproducible byte for byte
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u32(&mut self) -> u32 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (self.0 >> 33) as u32
    }

    fn below(&mut self, bound: u32) -> u32 {
        if bound == 0 { 0 } else { self.next_u32() % bound }
    }
}

fn opposite(bit: Bit) -> Bit {
    match bit {
        Bit::Zero => Bit::One,
        Bit::One => Bit::Zero,
    }
}

fn push_digit(modules: &mut Vec<Bit>, widths: &[u8; 4], start: Bit) {
    let mut bit = start;
    for &width in widths {
        for _ in 0..width {
            modules.push(bit);
        }
        bit = opposite(bit);
    }
}

/// Parse a 12-character ASCII digit string into a payload
pub fn parse_payload(text: &str) -> Option<[u8; 12]> {
    if text.len() != 12 || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let mut payload = [0u8; 12];
    for (i, b) in text.bytes().enumerate() {
        payload[i] = b - b'0';
    }
    Some(payload)
}

/// Expand a 12-digit payload into the 95-module bar pattern.
///
/// The leading digit selects the left-half parity pattern; the computed
/// check digit closes the right half.
pub fn encode_modules(payload: &[u8; 12]) -> Vec<Bit> {
    let mut modules = Vec::with_capacity(MODULE_COUNT);
    let pattern = parity_pattern_for_digit(payload[0]);
    let check = check_digit(payload);

    // Leading guard: bar space bar
    modules.extend([Bit::Zero, Bit::One, Bit::Zero]);

    for (i, &digit) in payload[1..7].iter().enumerate() {
        let even = pattern & (1 << (5 - i)) != 0;
        let table = if even { &LEFT_EVEN } else { &LEFT_ODD };
        push_digit(&mut modules, &table[digit as usize], Bit::One);
    }

    // Center guard: space bar space bar space
    modules.extend([Bit::One, Bit::Zero, Bit::One, Bit::Zero, Bit::One]);

    for &digit in payload[7..12].iter().chain([check].iter()) {
        push_digit(&mut modules, &RIGHT[digit as usize], Bit::Zero);
    }

    // Trailing guard
    modules.extend([Bit::Zero, Bit::One, Bit::Zero]);

    debug_assert_eq!(modules.len(), MODULE_COUNT);
    modules
}

/// Pixel runs of one rendered row, quiet zones included
fn run_plan(modules: &[Bit], opts: &RenderOptions) -> Vec<(u32, Bit)> {
    let mut plan: Vec<(u32, Bit)> = Vec::new();
    if opts.quiet_zone > 0 {
        plan.push((opts.quiet_zone as u32, Bit::One));
    }
    for &bit in modules {
        match plan.last_mut() {
            Some(run) if run.1 == bit => run.0 += opts.module_width as u32,
            _ => plan.push((opts.module_width as u32, bit)),
        }
    }
    if opts.quiet_zone > 0 {
        plan.push((opts.quiet_zone as u32, Bit::One));
    }
    plan
}

fn render_luma_row(modules: &[Bit], opts: &RenderOptions, rng: &mut Lcg) -> Vec<u8> {
    let mut plan = run_plan(modules, opts);

    if opts.edge_jitter {
        // Move one pixel across a boundary; totals are conserved so every
        // row stays the same width
        for i in 0..plan.len().saturating_sub(1) {
            match rng.below(3) {
                0 if plan[i].0 > 1 => {
                    plan[i].0 -= 1;
                    plan[i + 1].0 += 1;
                }
                2 if plan[i + 1].0 > 1 => {
                    plan[i].0 += 1;
                    plan[i + 1].0 -= 1;
                }
                _ => {}
            }
        }
    }

    let amplitude = 255 * opts.luma_jitter.min(100) as u32 / 100;
    let mut row = Vec::new();
    for &(width, bit) in &plan {
        for _ in 0..width {
            let value = match bit {
                Bit::Zero => rng.below(amplitude + 1) as u8,
                Bit::One => (255 - rng.below(amplitude + 1)) as u8,
            };
            row.push(value);
        }
    }
    row
}

/// Pixel width of a raster rendered with the given options
pub fn rendered_width(opts: &RenderOptions) -> usize {
    MODULE_COUNT * opts.module_width + 2 * opts.quiet_zone
}

/// Render a payload as a complete P6 byte buffer.
pub fn render_pixmap(payload: &[u8; 12], opts: &RenderOptions) -> Vec<u8> {
    let modules = encode_modules(payload);
    let width = rendered_width(opts);
    let mut rng = Lcg::new(opts.seed);

    let mut out = format!("P6\n{} {}\n255\n", width, opts.height).into_bytes();
    for _ in 0..opts.height {
        let row = render_luma_row(&modules, opts, &mut rng);
        debug_assert_eq!(row.len(), width);
        for value in row {
            out.extend([value, value, value]);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signal::run_length_encode;

    #[test]
    fn test_module_count() {
        let modules = encode_modules(&[5, 9, 0, 1, 2, 3, 4, 1, 2, 3, 4, 5]);
        assert_eq!(modules.len(), MODULE_COUNT);
        // Guards are dark-light-dark at both ends
        assert_eq!(&modules[..3], &[Bit::Zero, Bit::One, Bit::Zero]);
        assert_eq!(&modules[MODULE_COUNT - 3..], &[Bit::Zero, Bit::One, Bit::Zero]);
    }

    #[test]
    fn test_modules_make_59_runs() {
        let modules = encode_modules(&[9, 7, 8, 0, 1, 3, 2, 1, 1, 4, 6, 7]);
        let runs = run_length_encode(&modules);
        assert_eq!(runs.len(), 59);
        assert_eq!(runs[0].bit, Bit::Zero);
    }

    #[test]
    fn test_parse_payload() {
        assert_eq!(
            parse_payload("590123412345"),
            Some([5, 9, 0, 1, 2, 3, 4, 1, 2, 3, 4, 5])
        );
        assert_eq!(parse_payload("59012341234"), None);
        assert_eq!(parse_payload("59012341234x"), None);
    }

    #[test]
    fn test_render_dimensions() {
        let opts = RenderOptions::default();
        let buf = render_pixmap(&[9, 7, 8, 0, 1, 3, 2, 1, 1, 4, 6, 7], &opts);
        let pix = crate::raster::parse_pixmap(&buf).unwrap();
        assert_eq!(pix.width(), rendered_width(&opts));
        assert_eq!(pix.height(), opts.height);
    }

    #[test]
    fn test_render_is_deterministic() {
        let opts = RenderOptions {
            luma_jitter: 15,
            edge_jitter: true,
            ..Default::default()
        };
        let payload = [9, 7, 8, 0, 1, 3, 2, 1, 1, 4, 6, 7];
        assert_eq!(render_pixmap(&payload, &opts), render_pixmap(&payload, &opts));
    }
}
