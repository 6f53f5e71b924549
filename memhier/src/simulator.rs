use std::io::BufRead;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use crate::config::HierarchyConfig;
use crate::error::SimError;
use crate::hierarchy::{Hierarchy, Level};
use crate::trace::{parse_record, AccessKind, TraceRecord};

/// Feeds trace records into a hierarchy and keeps the global totals
///
/// It supports calling simulate multiple times, and will keep accumulating the totals and the time
/// taken to simulate
pub struct Simulator {
    hierarchy: Hierarchy,
    instruction_references: u64,
    data_references: u64,
    total_cycles: u64,
    simulation_time: Duration,
}

/// The result of a simulation. Can be serialised as the JSON report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationReport {
    pub instruction_references: u64,
    pub data_references: u64,
    pub total_cycles: u64,
    pub average_cycles_per_reference: f64,
    pub caches: Vec<CacheReport>,
}

/// The result for an individual level
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheReport {
    pub name: String,
    pub references: u64,
    pub misses: u64,
    pub penalties: u64,
    pub miss_rate: f64,
    pub average_access_time: f64,
}

impl Simulator {
    /// Creates a new simulator, failing if the geometry is invalid
    pub fn new(config: HierarchyConfig) -> Result<Self, SimError> {
        Ok(Self {
            hierarchy: Hierarchy::new(config)?,
            instruction_references: 0,
            data_references: 0,
            total_cycles: 0,
            simulation_time: Duration::ZERO,
        })
    }

    /// Runs a single record through the hierarchy, returning its latency
    pub fn step(&mut self, record: TraceRecord) -> u32 {
        let latency = match record.kind {
            AccessKind::Instruction => {
                self.instruction_references += 1;
                self.hierarchy.access_instruction(record.address)
            }
            AccessKind::Load | AccessKind::Store => {
                self.data_references += 1;
                self.hierarchy.access_data(record.address)
            }
        };
        self.total_cycles += latency as u64;
        latency
    }

    /// Simulates every record of a trace, in order
    ///
    /// The first malformed line aborts the run. Records before it have already been applied
    pub fn simulate<R: BufRead>(&mut self, reader: R) -> Result<SimulationReport, SimError> {
        let start = Instant::now();
        let mut records = 0u64;
        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            if let Some(record) = parse_record(&line, index + 1)? {
                self.step(record);
                records += 1;
            }
        }
        let elapsed = start.elapsed();
        self.simulation_time += elapsed;
        log::debug!("simulated {records} records in {}s", elapsed.as_secs_f64());
        Ok(self.report())
    }

    /// Builds a report from the current counters
    pub fn report(&self) -> SimulationReport {
        let references = self.instruction_references + self.data_references;
        let average_cycles_per_reference = if references == 0 {
            0.0
        } else {
            self.total_cycles as f64 / references as f64
        };
        SimulationReport {
            instruction_references: self.instruction_references,
            data_references: self.data_references,
            total_cycles: self.total_cycles,
            average_cycles_per_reference,
            caches: Level::ALL
                .iter()
                .map(|level| {
                    let stats = self.hierarchy.stats(*level);
                    let hit_time = self.hierarchy.config().level(*level).hit_time;
                    CacheReport {
                        name: level.name().to_string(),
                        references: stats.references(),
                        misses: stats.misses(),
                        penalties: stats.penalties(),
                        miss_rate: stats.miss_rate(),
                        average_access_time: stats.average_access_time(hit_time),
                    }
                })
                .collect(),
        }
    }

    pub fn hierarchy(&self) -> &Hierarchy {
        &self.hierarchy
    }

    /// Gets the wall-clock time spent simulating
    pub fn get_execution_time(&self) -> &Duration {
        &self.simulation_time
    }
}
