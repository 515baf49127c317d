use thiserror::Error;

/// Single-value input validation failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// VLAN id outside the usable range or inside the reserved set.
    #[error("VLAN id {0} is outside the usable range 2-4094")]
    VlanIdOutOfRange(u32),
    /// VLAN id that is not a number at all.
    #[error("VLAN id '{0}' is not numeric")]
    VlanIdNotNumeric(String),
    /// MAC address that does not parse as six colon-separated hex octets.
    #[error("malformed MAC address '{0}'")]
    MalformedMac(String),
}

/// Cross-field business rule failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleViolation {
    /// Unicast BUM mode needs at least one VTEP after synthesis.
    #[error("VXLAN '{0}' uses unicast BUM mode but has no VTEP and no remote address to synthesize one from")]
    UnicastWithoutVtep(String),
}

/// Defensive internal composition failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StructuralError {
    /// A section the pipeline must have produced is missing.
    #[error("expected section '{0}' missing after composition")]
    MissingSection(String),
}

/// Any failure raised while compiling a desired state into script text.
///
/// Compilation is all-or-nothing: the first error aborts the compile and no
/// partial script text is produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompileError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Rule(#[from] RuleViolation),
    #[error(transparent)]
    Structure(#[from] StructuralError),
}
