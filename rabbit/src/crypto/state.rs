//! Internal state of the Rabbit keystream generator (RFC 4503).

use symmetric_cipher::crypto::bit_word::{pack_words, unpack_words, BitWord, ByteOrder};

pub const KEYSTREAM_BLOCK: usize = 16;

/// Counter increments `a_0..a_7`.
const A: [u32; 8] = [
    0x4D34_D34D,
    0xD34D_34D3,
    0x34D3_4D34,
    0x4D34_D34D,
    0xD34D_34D3,
    0x34D3_4D34,
    0x4D34_D34D,
    0xD34D_34D3,
];

const SETUP_ITERATIONS: usize = 4;

/// `g(u) = low32(u^2) ^ high32(u^2)`.
fn g(u: u32) -> u32 {
    let square = u as u64 * u as u64;
    (square as u32) ^ ((square >> 32) as u32)
}

/// Eight state words, eight counters and the counter carry bit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RabbitState {
    x: [u32; 8],
    c: [u32; 8],
    carry: u32,
}

impl RabbitState {
    /// Key setup. `key` must be 16 bytes.
    pub fn from_key(key: &[u8]) -> Self {
        let k: Vec<u32> = pack_words(key, ByteOrder::Little);
        let hi = 0xFFFF_0000u32;
        let lo = 0x0000_FFFFu32;

        let x = [
            k[0],
            (k[3] << 16) | (k[2] >> 16),
            k[1],
            (k[0] << 16) | (k[3] >> 16),
            k[2],
            (k[1] << 16) | (k[0] >> 16),
            k[3],
            (k[2] << 16) | (k[1] >> 16),
        ];
        let c = [
            k[2].rotl(16),
            (k[0] & hi) | (k[1] & lo),
            k[3].rotl(16),
            (k[1] & hi) | (k[2] & lo),
            k[0].rotl(16),
            (k[2] & hi) | (k[3] & lo),
            k[1].rotl(16),
            (k[3] & hi) | (k[0] & lo),
        ];

        let mut state = Self { x, c, carry: 0 };
        for _ in 0..SETUP_ITERATIONS {
            state.next_state();
        }
        for i in 0..8 {
            state.c[i] ^= state.x[(i + 4) & 7];
        }
        state
    }

    /// Mixes an 8-byte IV into the counters of a keyed state.
    pub fn apply_iv(&mut self, iv: &[u8]) {
        let i0 = u32::read(&iv[..4], ByteOrder::Little);
        let i2 = u32::read(&iv[4..8], ByteOrder::Little);
        let i1 = (i0 >> 16) | (i2 & 0xFFFF_0000);
        let i3 = (i2 << 16) | (i0 & 0x0000_FFFF);

        for (i, word) in [i0, i1, i2, i3].iter().cycle().take(8).enumerate() {
            self.c[i] ^= word;
        }
        for _ in 0..SETUP_ITERATIONS {
            self.next_state();
        }
    }

    fn update_counters(&mut self) {
        for (counter, a) in self.c.iter_mut().zip(A.iter()) {
            let sum = *counter as u64 + *a as u64 + self.carry as u64;
            self.carry = (sum >> 32) as u32;
            *counter = sum as u32;
        }
    }

    /// One iteration of the next-state function.
    pub fn next_state(&mut self) {
        self.update_counters();

        let mut gs = [0u32; 8];
        for (i, value) in gs.iter_mut().enumerate() {
            *value = g(self.x[i].add_mod(self.c[i]));
        }

        for i in 0..8 {
            let prev = gs[(i + 7) & 7];
            let prev2 = gs[(i + 6) & 7];
            self.x[i] = if i % 2 == 0 {
                gs[i].add_mod(prev.rotl(16)).add_mod(prev2.rotl(16))
            } else {
                gs[i].add_mod(prev.rotl(8)).add_mod(prev2)
            };
        }
    }

    /// Keystream block for the current state, little-endian.
    pub fn extract(&self) -> [u8; KEYSTREAM_BLOCK] {
        let x = &self.x;
        let words = [
            x[0] ^ (x[5] >> 16) ^ (x[3] << 16),
            x[2] ^ (x[7] >> 16) ^ (x[5] << 16),
            x[4] ^ (x[1] >> 16) ^ (x[7] << 16),
            x[6] ^ (x[3] >> 16) ^ (x[1] << 16),
        ];
        let mut block = [0u8; KEYSTREAM_BLOCK];
        block.copy_from_slice(&unpack_words(&words, ByteOrder::Little));
        block
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn g_folds_the_square() {
        assert_eq!(g(0), 0);
        assert_eq!(g(2), 4);
        // 0xFFFFFFFF^2 = 0xFFFFFFFE_00000001
        assert_eq!(g(u32::MAX), 0xFFFF_FFFF);
    }

    #[test]
    fn counter_carry_propagates_between_iterations() {
        let mut state = RabbitState {
            x: [0; 8],
            c: [u32::MAX; 8],
            carry: 0,
        };
        state.update_counters();
        assert_eq!(state.carry, 1);
        assert_eq!(state.c[0], A[0].wrapping_sub(1));
        assert_eq!(state.c[1], A[1]);
    }
}
