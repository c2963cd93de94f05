//! Fixed-width word helpers shared by the ARX, Feistel and SPN engines.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteOrder {
    Big,
    Little,
}

pub trait BitWord: Copy + Sized {
    const BITS: u32;
    const BYTES: usize;

    fn rotl(self, n: u32) -> Self;
    fn rotr(self, n: u32) -> Self;
    /// Addition modulo 2^BITS.
    fn add_mod(self, rhs: Self) -> Self;
    /// Subtraction modulo 2^BITS.
    fn sub_mod(self, rhs: Self) -> Self;
    /// Reads the first `BYTES` bytes of `bytes`.
    fn read(bytes: &[u8], order: ByteOrder) -> Self;
    fn write(self, out: &mut [u8], order: ByteOrder);
}

macro_rules! impl_bit_word {
    ($t:ty) => {
        impl BitWord for $t {
            const BITS: u32 = <$t>::BITS;
            const BYTES: usize = std::mem::size_of::<$t>();

            #[inline]
            fn rotl(self, n: u32) -> Self {
                self.rotate_left(n % Self::BITS)
            }

            #[inline]
            fn rotr(self, n: u32) -> Self {
                self.rotate_right(n % Self::BITS)
            }

            #[inline]
            fn add_mod(self, rhs: Self) -> Self {
                self.wrapping_add(rhs)
            }

            #[inline]
            fn sub_mod(self, rhs: Self) -> Self {
                self.wrapping_sub(rhs)
            }

            #[inline]
            fn read(bytes: &[u8], order: ByteOrder) -> Self {
                let mut raw = [0u8; std::mem::size_of::<$t>()];
                raw.copy_from_slice(&bytes[..Self::BYTES]);
                match order {
                    ByteOrder::Big => <$t>::from_be_bytes(raw),
                    ByteOrder::Little => <$t>::from_le_bytes(raw),
                }
            }

            #[inline]
            fn write(self, out: &mut [u8], order: ByteOrder) {
                let raw = match order {
                    ByteOrder::Big => self.to_be_bytes(),
                    ByteOrder::Little => self.to_le_bytes(),
                };
                out[..Self::BYTES].copy_from_slice(&raw);
            }
        }
    };
}

impl_bit_word!(u16);
impl_bit_word!(u32);

/// Packs `bytes` into words. Trailing bytes that do not fill a word are ignored,
/// so callers align the buffer first.
pub fn pack_words<W: BitWord>(bytes: &[u8], order: ByteOrder) -> Vec<W> {
    bytes
        .chunks_exact(W::BYTES)
        .map(|chunk| W::read(chunk, order))
        .collect()
}

pub fn unpack_words<W: BitWord>(words: &[W], order: ByteOrder) -> Vec<u8> {
    let mut out = vec![0u8; words.len() * W::BYTES];
    for (word, chunk) in words.iter().zip(out.chunks_exact_mut(W::BYTES)) {
        word.write(chunk, order);
    }
    out
}
