use bitmanip_core::{
    BitmanipUnit, Mnemonic, Operands, TraceEvent, TraceSink, UnitConfig, Width, PSEUDO_NAMES,
};
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

macro_rules! console_log {
    ($($t:tt)*) => (web_sys::console::log_1(&JsValue::from_str(&format!($($t)*))))
}

/// JS-compatible description of one catalog instruction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub name: String,
    pub arity: usize,
    pub narrow: bool,
    pub rv64_only: bool,
}

impl From<Mnemonic> for CatalogEntry {
    fn from(mnemonic: Mnemonic) -> Self {
        Self {
            name: mnemonic.name().to_owned(),
            arity: mnemonic.arity(),
            narrow: mnemonic.is_narrow(),
            rv64_only: mnemonic.requires_rv64(),
        }
    }
}

/// Catalog entries available on a core of `native_width`.
#[must_use]
pub fn catalog_for(native_width: Width) -> Vec<CatalogEntry> {
    Mnemonic::ALL
        .into_iter()
        .filter(|mnemonic| native_width == Width::W64 || !mnemonic.requires_rv64())
        .map(CatalogEntry::from)
        .collect()
}

/// Formats a trace event as a single console line.
#[must_use]
pub fn describe_event(event: &TraceEvent) -> String {
    match event {
        TraceEvent::Executed {
            mnemonic,
            width,
            operands,
            result,
        } => format!(
            "{mnemonic} [{} bits] rs1={:#x} rs2={:#x} rs3={:#x} -> {result:#x}",
            width.bits(),
            operands.rs1,
            operands.rs2,
            operands.rs3
        ),
        TraceEvent::Rejected { mnemonic, fault } => format!("{mnemonic} rejected: {fault}"),
    }
}

struct ConsoleSink;

impl TraceSink for ConsoleSink {
    fn on_event(&mut self, event: TraceEvent) {
        console_log!("{}", describe_event(&event));
    }
}

#[wasm_bindgen]
pub struct WasmBitmanipUnit {
    unit: BitmanipUnit,
}

#[wasm_bindgen]
impl WasmBitmanipUnit {
    /// Creates a unit for a core with `xlen` bit registers (32 or 64).
    #[wasm_bindgen(constructor)]
    pub fn new(xlen: u32, tracing: bool) -> Result<Self, JsError> {
        console_error_panic_hook::set_once();
        let native_width = Width::from_bits(xlen)
            .ok_or_else(|| JsError::new(&format!("unsupported register width {xlen}")))?;
        Ok(Self {
            unit: BitmanipUnit::new(UnitConfig {
                native_width,
                tracing_enabled: tracing,
            }),
        })
    }

    /// Native register width in bits.
    pub fn xlen(&self) -> u32 {
        self.unit.config().native_width.bits()
    }

    /// Executes an instruction by name. Unused operands are ignored.
    pub fn execute(&self, name: &str, rs1: u64, rs2: u64, rs3: u64) -> Result<u64, JsError> {
        let mnemonic = name
            .parse::<Mnemonic>()
            .map_err(|err| JsError::new(&err.to_string()))?;
        self.unit
            .execute_traced(mnemonic, &Operands::ternary(rs1, rs2, rs3), &mut ConsoleSink)
            .map_err(|fault| JsError::new(&fault.to_string()))
    }

    /// Executes an instruction or pseudo-instruction with an operand array.
    pub fn execute_named(&self, name: &str, operands: &[u64]) -> Result<u64, JsError> {
        self.unit
            .execute_named(name, operands)
            .map_err(|err| JsError::new(&err.to_string()))
    }

    /// Returns the instructions available at this width as an array of objects.
    pub fn catalog(&self) -> Result<JsValue, JsError> {
        serde_wasm_bindgen::to_value(&catalog_for(self.unit.config().native_width))
            .map_err(|err| JsError::new(&err.to_string()))
    }

    /// Returns the recognized pseudo-instruction names.
    pub fn pseudo_names(&self) -> js_sys::Array {
        PSEUDO_NAMES.iter().map(|name| JsValue::from_str(name)).collect()
    }
}
