//! CSV output for network blocks.

use crate::models::NetworkBlock;

/// Quote a value and right-align it to `width`.
///
/// Values already wider than `width` are returned quoted but unpadded.
pub fn quoted_field<T: ToString>(value: T, width: usize) -> String {
    let quoted = format!("\"{}\"", value.to_string().replace('"', "\"\""));
    format!("{quoted:>width$}")
}

const CIDR_WIDTH: usize = 45;
const ADDR_WIDTH: usize = 41;

/// Render blocks as CSV with a header row.
pub fn render_csv(blocks: &[NetworkBlock]) -> String {
    let mut out = format!(
        "{},{},{},{}\n",
        quoted_field("cidr", CIDR_WIDTH),
        quoted_field("first", ADDR_WIDTH),
        quoted_field("last", ADDR_WIDTH),
        quoted_field("prefix", 8),
    );
    for block in blocks {
        out.push_str(&format!(
            "{},{},{},{}\n",
            quoted_field(block, CIDR_WIDTH),
            quoted_field(block.network(), ADDR_WIDTH),
            quoted_field(block.broadcast(), ADDR_WIDTH),
            quoted_field(block.prefix(), 8),
        ));
    }
    out
}
