//! GPU検出
//!
//! NVML（nvml-wrapper）でCUDAデバイスの有無を判定する。
//! 判定は常に bool を返し、検出処理の失敗は「GPUなし」として扱う。

use nvml_wrapper::Nvml;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, info};

/// Reports whether a GPU is usable on this host
pub trait AcceleratorProbe: Send + Sync {
    /// `true` when at least one GPU is available
    fn is_available(&self) -> bool;
}

/// NVML-backed probe
///
/// The NVML library is loaded once. When it cannot be loaded (no driver,
/// no NVIDIA hardware) the probe answers `false` for the process lifetime.
pub struct NvmlProbe {
    nvml: Option<Nvml>,
}

impl NvmlProbe {
    /// Load NVML, logging the outcome.
    pub fn new() -> Self {
        match Nvml::init() {
            Ok(nvml) => {
                info!("NVML initialized");
                Self { nvml: Some(nvml) }
            }
            Err(e) => {
                info!(error = %e, "NVML unavailable, reporting CPU only");
                Self { nvml: None }
            }
        }
    }
}

impl Default for NvmlProbe {
    fn default() -> Self {
        Self::new()
    }
}

impl AcceleratorProbe for NvmlProbe {
    fn is_available(&self) -> bool {
        let Some(nvml) = &self.nvml else {
            return false;
        };
        match nvml.device_count() {
            Ok(count) => {
                debug!(device_count = count, "Queried GPU device count");
                count > 0
            }
            Err(e) => {
                debug!(error = %e, "GPU device count query failed");
                false
            }
        }
    }
}

/// Probe with a constant answer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedProbe(pub bool);

impl AcceleratorProbe for FixedProbe {
    fn is_available(&self) -> bool {
        self.0
    }
}

/// Value of the `status` field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkerStatus {
    /// GPU detected
    #[serde(rename = "GPU enabled")]
    GpuEnabled,
    /// No GPU detected
    #[serde(rename = "CPU enabled")]
    CpuEnabled,
}

impl WorkerStatus {
    /// Map a detection result to a status
    pub fn from_availability(gpu_available: bool) -> Self {
        if gpu_available {
            WorkerStatus::GpuEnabled
        } else {
            WorkerStatus::CpuEnabled
        }
    }

    /// Wire representation
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkerStatus::GpuEnabled => "GPU enabled",
            WorkerStatus::CpuEnabled => "CPU enabled",
        }
    }
}

impl fmt::Display for WorkerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `GET /status` response body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusPayload {
    /// Detected compute mode
    pub status: WorkerStatus,
}

impl StatusPayload {
    /// Run detection and build the payload
    pub fn detect(probe: &dyn AcceleratorProbe) -> Self {
        Self {
            status: WorkerStatus::from_availability(probe.is_available()),
        }
    }
}
