//! Name decryption for items.dat format

use log::trace;

/// Shared 16-byte secret used to decrypt item names (versions 3+).
const NAME_SECRET: &[u8; 16] = b"PBG892FXX982ABC*";

/// XOR-based name decryption used from items.dat version 3 onward.
///
/// Algorithm (the reverse of Proton SDK's `MemorySerializeStringEncrypted`):
/// - The keystream is the shared secret, cycled byte by byte.
/// - The starting key position is `item_id % 16`, so the same name bytes
///   decrypt differently under different item ids.
///
/// XOR is self-inverse: applying this to plaintext produces the wire form.
pub fn decrypt_name(data: &mut [u8], item_id: u32) {
    trace!("Decrypting {} name bytes keyed by item id {}", data.len(), item_id);

    let mut key_pos = item_id as usize % NAME_SECRET.len();
    for byte in data.iter_mut() {
        *byte ^= NAME_SECRET[key_pos];
        key_pos = (key_pos + 1) % NAME_SECRET.len();
    }
}
