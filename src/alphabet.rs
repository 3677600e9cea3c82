/// The two 62-symbol orderings understood by the codec.
///
/// `Standard` orders digits, then uppercase, then lowercase. `InvertedCase`
/// swaps the two letter segments; catalog identifiers are minted with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Alphabet {
    Standard,
    InvertedCase,
}

const STANDARD: &[u8; 62] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";
const INVERTED_CASE: &[u8; 62] = b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

const INVALID: u8 = u8::MAX;

const fn reverse_table(symbols: &[u8; 62]) -> [u8; 256] {
    let mut table = [INVALID; 256];
    let mut i = 0;
    while i < symbols.len() {
        table[symbols[i] as usize] = i as u8;
        i += 1;
    }
    table
}

const STANDARD_VALUES: [u8; 256] = reverse_table(STANDARD);
const INVERTED_CASE_VALUES: [u8; 256] = reverse_table(INVERTED_CASE);

impl Alphabet {
    /// Symbols in digit order, index = digit value.
    pub const fn symbols(self) -> &'static [u8; 62] {
        match self {
            Self::Standard => STANDARD,
            Self::InvertedCase => INVERTED_CASE,
        }
    }

    /// The symbol for digit value `digit` (0..62).
    pub const fn symbol(self, digit: u8) -> u8 {
        self.symbols()[digit as usize]
    }

    /// The symbol for zero, used to pad fixed-width encodings.
    pub const fn zero(self) -> u8 {
        self.symbol(0)
    }

    /// Digit value of `symbol`, or `None` if it is not part of this alphabet.
    pub const fn value_of(self, symbol: char) -> Option<u8> {
        if !symbol.is_ascii() {
            return None;
        }
        let table = match self {
            Self::Standard => &STANDARD_VALUES,
            Self::InvertedCase => &INVERTED_CASE_VALUES,
        };
        match table[symbol as usize] {
            INVALID => None,
            value => Some(value),
        }
    }
}
