use crate::error::CompileError;
use crate::options::CompileOptions;
use crate::result::CompileResult;
use tracing::warn;

/// Outcome of emitting one node for one target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emission {
    /// Text was written
    Written,
    /// The target has no rule for this kind
    Skipped,
    /// The kind is known but not implemented yet
    Unsupported(&'static str),
}

/// Text produced for one target plus the unimplemented kinds it met
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Compiled {
    pub output: String,
    pub unsupported: Vec<&'static str>,
}

/// Collects unsupported kinds while a target is emitted
#[derive(Debug, Default)]
pub struct UnsupportedLog {
    kinds: Vec<&'static str>,
}

impl UnsupportedLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an emission. Fails instead when the options ask for it.
    pub fn record(&mut self, emission: Emission, options: &CompileOptions) -> CompileResult<()> {
        if let Emission::Unsupported(kind) = emission {
            if options.fail_on_unsupported {
                return Err(CompileError::UnsupportedFeature(kind.to_string()));
            }
            warn!(kind, "Node kind not supported yet - nothing emitted");
            if !self.kinds.contains(&kind) {
                self.kinds.push(kind);
            }
        }
        Ok(())
    }

    pub fn finish(self, output: String) -> Compiled {
        Compiled {
            output,
            unsupported: self.kinds,
        }
    }
}
