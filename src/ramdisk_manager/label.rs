// ============================================================================
// File: packages/ramvault/src/ramdisk_manager/label.rs
// ----------------------------------------------------------------------------
// Volume label generation
// ============================================================================

use uuid::Uuid;

/// Number of random bytes rendered into the label
const LABEL_TOKEN_BYTES: usize = 6;

/// Generate a label such as `Pond RAM disk (3fa94c01be72)`
///
/// The token keeps a fresh volume from colliding with one left behind by a
/// crashed earlier run. It comes from a v4 UUID, whose leading six bytes are
/// drawn straight from the OS random source with no version or variant bits.
pub(crate) fn generate_volume_label(prefix: &str) -> String {
    let id = Uuid::new_v4();
    let token: String = id.as_bytes()[..LABEL_TOKEN_BYTES]
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect();
    format!("{} ({})", prefix, token)
}
