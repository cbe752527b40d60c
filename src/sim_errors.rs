use thiserror::Error;

#[derive(Error, Debug)]
pub enum SimError {
    #[error("Body '{name}' has a non-positive or non-finite mass: {mass}")]
    InvalidBodyMass { name: String, mass: f64 },

    #[error("Central mass must be positive and finite, got {0}")]
    InvalidCentralMass(f64),

    #[error("Body '{0}' has a non-finite initial position or velocity")]
    NonFiniteState(String),

    #[error("Central mass position must be finite")]
    NonFiniteCentralPosition,

    #[error("Time step must be positive and finite, got {0}")]
    InvalidTimeStep(f64),

    #[error("Gravitational constant must be positive and finite, got {0}")]
    InvalidGravitationalConstant(f64),

    #[error("Number of steps must be positive")]
    ZeroSteps,

    #[error("Duplicate body name: {0}")]
    DuplicateBodyName(String),

    #[error("Invalid start epoch: {0}")]
    InvalidEpoch(String),

    #[error("Zero separation between body and central mass")]
    ZeroSeparation,

    #[error("Singularity: body '{body}' (index {index}) coincides with the central mass at step {step}")]
    Singularity {
        body: String,
        index: usize,
        step: usize,
    },

    #[error("Simulation failed on body '{body}' at step {step} and cannot be advanced")]
    SimulationFailed { body: String, step: usize },

    #[error("Unable to perform file operation: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV export error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Scenario parsing error: {0}")]
    YamlError(#[from] serde_yaml::Error),
}

impl SimError {
    /// True for errors raised while validating inputs, before any step runs.
    pub fn is_configuration_error(&self) -> bool {
        use SimError::*;
        matches!(
            self,
            InvalidBodyMass { .. }
                | InvalidCentralMass(_)
                | NonFiniteState(_)
                | NonFiniteCentralPosition
                | InvalidTimeStep(_)
                | InvalidGravitationalConstant(_)
                | ZeroSteps
                | DuplicateBodyName(_)
                | InvalidEpoch(_)
        )
    }

    /// True for errors raised by the force law during a step.
    pub fn is_domain_error(&self) -> bool {
        matches!(self, SimError::ZeroSeparation | SimError::Singularity { .. })
    }
}

impl PartialEq for SimError {
    fn eq(&self, other: &Self) -> bool {
        use SimError::*;
        match (self, other) {
            (
                InvalidBodyMass { name: a, mass: ma },
                InvalidBodyMass { name: b, mass: mb },
            ) => a == b && ma.to_bits() == mb.to_bits(),
            (InvalidCentralMass(a), InvalidCentralMass(b)) => a.to_bits() == b.to_bits(),
            (NonFiniteState(a), NonFiniteState(b)) => a == b,
            (InvalidTimeStep(a), InvalidTimeStep(b)) => a.to_bits() == b.to_bits(),
            (InvalidGravitationalConstant(a), InvalidGravitationalConstant(b)) => {
                a.to_bits() == b.to_bits()
            }
            (DuplicateBodyName(a), DuplicateBodyName(b)) => a == b,
            (InvalidEpoch(a), InvalidEpoch(b)) => a == b,
            (
                Singularity {
                    body: a,
                    index: ia,
                    step: sa,
                },
                Singularity {
                    body: b,
                    index: ib,
                    step: sb,
                },
            ) => a == b && ia == ib && sa == sb,
            (SimulationFailed { body: a, step: sa }, SimulationFailed { body: b, step: sb }) => {
                a == b && sa == sb
            }

            // wrapped foreign errors only compare by variant
            (IoError(_), IoError(_)) => true,
            (CsvError(_), CsvError(_)) => true,
            (YamlError(_), YamlError(_)) => true,

            (NonFiniteCentralPosition, NonFiniteCentralPosition) => true,
            (ZeroSteps, ZeroSteps) => true,
            (ZeroSeparation, ZeroSeparation) => true,

            _ => false,
        }
    }
}
