/// Holds the silt, clay, and organic matter contents of soil samples
///
/// Each field may be a scalar, a slice, or an array of any dimension (see
/// [crate::numeric::Operand]); fields are broadcast against each other.
///
/// All contents are percentages.
#[derive(Clone, Copy, Debug)]
pub struct SiltClayOm<S, C, O> {
    /// Silt content (%)
    pub silt: S,

    /// Clay content (%)
    pub clay: C,

    /// Organic matter content (%)
    pub organic_matter: O,
}

/// Holds the clay and organic matter contents of soil samples
///
/// See [SiltClayOm] regarding the accepted field types.
#[derive(Clone, Copy, Debug)]
pub struct ClayOm<C, O> {
    /// Clay content (%)
    pub clay: C,

    /// Organic matter content (%)
    pub organic_matter: O,
}
