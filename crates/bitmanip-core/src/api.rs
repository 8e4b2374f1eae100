//! Host-facing execution unit and trace hooks.

use crate::execute::{self, Operands};
use crate::pseudo::expand_pseudo;
use crate::{DispatchFault, ExecuteError, Mnemonic, UnknownMnemonic, Width};

/// Immutable configuration for an execution unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct UnitConfig {
    /// Native register width of the core the unit is attached to.
    pub native_width: Width,
    /// Enables trace callback dispatch.
    pub tracing_enabled: bool,
}

impl Default for UnitConfig {
    fn default() -> Self {
        Self {
            native_width: Width::W64,
            tracing_enabled: false,
        }
    }
}

/// Trace events emitted per execution when tracing is enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum TraceEvent {
    /// A kernel ran and produced a result.
    Executed {
        /// Executed instruction.
        mnemonic: Mnemonic,
        /// Width the kernel computed at.
        width: Width,
        /// Operands as supplied.
        operands: Operands,
        /// Value for the destination register.
        result: u64,
    },
    /// Dispatch rejected the instruction.
    Rejected {
        /// Rejected instruction.
        mnemonic: Mnemonic,
        /// Rejection reason.
        fault: DispatchFault,
    },
}

/// Sink trait for trace hooks.
pub trait TraceSink {
    /// Records an event in execution order.
    fn on_event(&mut self, event: TraceEvent);
}

/// Collects events in memory.
impl TraceSink for Vec<TraceEvent> {
    fn on_event(&mut self, event: TraceEvent) {
        self.push(event);
    }
}

/// Stateless bit-manipulation execution unit bound to one core width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BitmanipUnit {
    config: UnitConfig,
}

impl BitmanipUnit {
    /// Creates a unit with the given configuration.
    #[must_use]
    pub const fn new(config: UnitConfig) -> Self {
        Self { config }
    }

    /// Returns the unit configuration.
    #[must_use]
    pub const fn config(&self) -> &UnitConfig {
        &self.config
    }

    /// Executes one instruction.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchFault::RequiresRv64`] for a 64-bit-only instruction
    /// on a 32-bit unit.
    pub const fn execute(
        &self,
        mnemonic: Mnemonic,
        operands: &Operands,
    ) -> Result<u64, DispatchFault> {
        execute::execute(mnemonic, self.config.native_width, operands)
    }

    /// Executes one instruction and reports it to `sink` when tracing is on.
    ///
    /// # Errors
    ///
    /// Same as [`Self::execute`].
    pub fn execute_traced(
        &self,
        mnemonic: Mnemonic,
        operands: &Operands,
        sink: &mut dyn TraceSink,
    ) -> Result<u64, DispatchFault> {
        let outcome = self.execute(mnemonic, operands);

        if self.config.tracing_enabled {
            let event = match outcome {
                Ok(result) => TraceEvent::Executed {
                    mnemonic,
                    width: execute::effective_width(mnemonic, self.config.native_width),
                    operands: *operands,
                    result,
                },
                Err(fault) => TraceEvent::Rejected { mnemonic, fault },
            };
            sink.on_event(event);
        }

        outcome
    }

    /// Executes an instruction or pseudo-instruction by assembler name.
    ///
    /// Pseudo-instructions take only `rs1`; their control immediate is
    /// supplied as `rs2`.
    ///
    /// # Errors
    ///
    /// Returns [`ExecuteError::Unknown`] when the name resolves to nothing and
    /// [`ExecuteError::Dispatch`] when dispatch rejects the instruction or
    /// the operand count.
    pub fn execute_named(&self, name: &str, values: &[u64]) -> Result<u64, ExecuteError> {
        if let Some(mnemonic) = Mnemonic::from_name(name) {
            return execute::execute_slice(mnemonic, self.config.native_width, values)
                .map_err(ExecuteError::from);
        }

        let expansion = expand_pseudo(name, self.config.native_width).ok_or_else(|| {
            UnknownMnemonic {
                name: name.to_owned(),
            }
        })?;

        let rs1 = match values {
            &[rs1] => rs1,
            _ => {
                return Err(DispatchFault::OperandCount {
                    mnemonic: expansion.mnemonic,
                    expected: 1,
                    actual: values.len(),
                }
                .into())
            }
        };

        self.execute(
            expansion.mnemonic,
            &Operands::binary(rs1, expansion.immediate),
        )
        .map_err(ExecuteError::from)
    }
}
