//! Arithmetic modulo p = 2^255 − 19, the curve25519 base field.
//!
//! Elements are kept fully reduced: every constructor and operation returns
//! a value in `[0, p)`. Multiplication and exponentiation go through
//! Montgomery form; the linear operations use the modular helpers on `U256`
//! directly. All arithmetic here is variable-time — the operands are public
//! curve coordinates, and the secret-dependent work happens inside the
//! delegated X25519 ladder.

use core::fmt::{self, Debug};
use core::ops::{Add, Mul, Neg, Sub};

use crypto_bigint::{
    ArrayEncoding, U256,
    modular::runtime_mod::{DynResidue, DynResidueParams},
};

/// Constant representing the modulus serialized as hex.
/// p = 2^255 − 19
const MODULUS_HEX: &str = "7fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffed";

const MODULUS: U256 = U256::from_be_hex(MODULUS_HEX);

/// Exponent used for Fermat inversion, p − 2.
const MODULUS_MINUS_TWO: U256 =
    U256::from_be_hex("7fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffeb");

type Residue = DynResidue<{ U256::LIMBS }>;

fn to_residue(value: &U256) -> Residue {
    DynResidue::new(value, DynResidueParams::new(&MODULUS))
}

/// Element of the curve25519 base field used for curve coordinates.
#[derive(Clone, Copy, Default, Eq, PartialEq)]
pub struct FieldElement(U256);

impl FieldElement {
    /// The additive identity.
    pub const ZERO: Self = Self(U256::ZERO);

    /// The multiplicative identity.
    pub const ONE: Self = Self(U256::ONE);

    /// Element from a small integer.
    pub(crate) const fn from_u64(n: u64) -> Self {
        Self(U256::from_u64(n))
    }

    /// Element from a big-endian hex string, which must already be reduced.
    /// Used for curve constants.
    pub(crate) const fn from_hex(hex: &str) -> Self {
        Self(U256::from_be_hex(hex))
    }

    /// Decodes the 32-byte little-endian wire form per RFC 7748: the most
    /// significant bit of the last byte is cleared before the value is
    /// interpreted, and the result is reduced modulo p. Total over all
    /// inputs.
    pub fn from_bytes(bytes: &[u8; 32]) -> Self {
        let mut le = *bytes;
        le[31] &= 0x7f;
        let value = U256::from_le_slice(&le);
        // The masked value is below 2^255 < 2p, so one subtraction reduces.
        if value >= MODULUS {
            Self(value.wrapping_sub(&MODULUS))
        } else {
            Self(value)
        }
    }

    /// Encodes the canonical value as 32 little-endian bytes. Inverse of
    /// [`FieldElement::from_bytes`] for every element in `[0, p)`.
    pub fn to_bytes(&self) -> [u8; 32] {
        self.0.to_le_byte_array().into()
    }

    /// Returns `self²`.
    pub fn square(&self) -> Self {
        let r = to_residue(&self.0);
        Self(r.mul(&r).retrieve())
    }

    /// Returns the multiplicative inverse, or `None` for zero.
    ///
    /// Computed as `self^(p − 2)`, which is variable-time; see the module
    /// docs for why that is acceptable here.
    pub fn invert(&self) -> Option<Self> {
        if self.0 == U256::ZERO {
            return None;
        }
        Some(Self(to_residue(&self.0).pow(&MODULUS_MINUS_TWO).retrieve()))
    }
}

impl Debug for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FieldElement(0x{:X})", &self.0)
    }
}

impl Add<&FieldElement> for &FieldElement {
    type Output = FieldElement;

    fn add(self, rhs: &FieldElement) -> FieldElement {
        FieldElement(self.0.add_mod(&rhs.0, &MODULUS))
    }
}

impl Add for FieldElement {
    type Output = FieldElement;

    fn add(self, rhs: FieldElement) -> FieldElement {
        &self + &rhs
    }
}

impl Sub<&FieldElement> for &FieldElement {
    type Output = FieldElement;

    fn sub(self, rhs: &FieldElement) -> FieldElement {
        FieldElement(self.0.sub_mod(&rhs.0, &MODULUS))
    }
}

impl Sub for FieldElement {
    type Output = FieldElement;

    fn sub(self, rhs: FieldElement) -> FieldElement {
        &self - &rhs
    }
}

impl Mul<&FieldElement> for &FieldElement {
    type Output = FieldElement;

    fn mul(self, rhs: &FieldElement) -> FieldElement {
        FieldElement(to_residue(&self.0).mul(&to_residue(&rhs.0)).retrieve())
    }
}

impl Mul for FieldElement {
    type Output = FieldElement;

    fn mul(self, rhs: FieldElement) -> FieldElement {
        &self * &rhs
    }
}

impl Neg for &FieldElement {
    type Output = FieldElement;

    fn neg(self) -> FieldElement {
        FieldElement(self.0.neg_mod(&MODULUS))
    }
}

impl Neg for FieldElement {
    type Output = FieldElement;

    fn neg(self) -> FieldElement {
        -&self
    }
}
