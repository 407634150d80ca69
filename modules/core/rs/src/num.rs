use std::fmt::Debug;

/// Primitive integers, signed or unsigned.
pub trait PrimInt: ::num::PrimInt + Debug + Default {}

impl<T: ::num::PrimInt + Debug + Default> PrimInt for T {}

/// Non-negative primitive integers, e.g. lengths of alignment steps.
pub trait PrimUInt: PrimInt + ::num::Unsigned {}

impl<T: PrimInt + ::num::Unsigned> PrimUInt for T {}
