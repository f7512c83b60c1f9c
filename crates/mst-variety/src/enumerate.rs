use std::sync::Arc;

use mst_core::{AlgebraicSystem, ErrorInfo, MstError};
use mst_struct::{structure_hash, Modality, Structure, StructureBuilder};
use rayon::prelude::*;
use tracing::{debug, warn};

use crate::cancel::CancellationToken;
use crate::kind::VarietyKind;
use crate::options::EnumerationOptions;
use crate::qualifier::{AcceptAll, StructurePredicate};
use crate::report::EnumerationReport;
use crate::space::CandidateSpace;

/// Largest order whose full universe is enumerated without a warning.
pub const TRACTABLE_ORDER: u8 = 24;

/// Structures produced by one run together with its bookkeeping.
#[derive(Debug, Clone, Default)]
pub struct EnumerationOutcome {
    /// Accepted structures in ascending integer order.
    pub structures: Vec<Structure>,
    /// Candidates examined before the run stopped.
    pub candidates_visited: u64,
    /// The run stopped at `max_candidates` before exhausting the space.
    pub truncated: bool,
    /// The run stopped because its token was cancelled.
    pub cancelled: bool,
}

/// Generates classes, instances or modality substructures of one system.
///
/// Candidates are visited in ascending integer order and the output keeps
/// that order whether the scan runs sequentially or on a rayon pool.
#[derive(Debug, Clone)]
pub struct VarietyEnumerator {
    system: AlgebraicSystem,
    modality: Option<Arc<Modality>>,
    cancel: CancellationToken,
}

struct ChunkOutcome {
    accepted: Vec<(u64, Structure)>,
    scanned: u64,
    cancelled: bool,
}

struct Scan<'a> {
    kind: VarietyKind,
    system: AlgebraicSystem,
    space: CandidateSpace,
    modality: Option<&'a Arc<Modality>>,
    predicate: &'a dyn StructurePredicate,
    cancel: &'a CancellationToken,
    limit: usize,
}

impl Scan<'_> {
    fn admit(&self, candidate: u64) -> Result<Option<Structure>, MstError> {
        if self.kind == VarietyKind::Classes
            && !mst_bits::is_class_number(self.system.order(), candidate)
        {
            return Ok(None);
        }
        let mut builder = StructureBuilder::new(self.system).number(candidate);
        if let Some(modality) = self.modality {
            builder = builder.modality(Arc::clone(modality));
        }
        let structure = builder.build()?;
        Ok(self.predicate.accepts(&structure).then_some(structure))
    }

    /// Scans indices `first..=last`, keeping at most `limit` structures.
    fn chunk(&self, first: u64, last: u64) -> Result<ChunkOutcome, MstError> {
        let mut out = ChunkOutcome {
            accepted: Vec::new(),
            scanned: 0,
            cancelled: false,
        };
        for index in first..=last {
            if self.cancel.is_cancelled() {
                out.cancelled = true;
                break;
            }
            out.scanned += 1;
            if let Some(structure) = self.admit(self.space.candidate(index))? {
                out.accepted.push((index, structure));
                if out.accepted.len() >= self.limit {
                    break;
                }
            }
        }
        Ok(out)
    }
}

fn thread_pool_error(err: impl ToString) -> MstError {
    MstError::Enumeration(ErrorInfo::new("thread-pool", err.to_string()))
}

impl VarietyEnumerator {
    /// Enumerator over the whole universe of `system`.
    pub fn new(system: AlgebraicSystem) -> Self {
        Self {
            system,
            modality: None,
            cancel: CancellationToken::new(),
        }
    }

    /// Attaches the modality used by [`VarietyKind::SubstructuresOfModality`].
    pub fn with_modality(mut self, modality: Arc<Modality>) -> Self {
        self.modality = Some(modality);
        self
    }

    /// Observes `token` between candidates.
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = token;
        self
    }

    /// Returns the enumerated system.
    pub fn system(&self) -> &AlgebraicSystem {
        &self.system
    }

    /// Returns the attached modality, if any.
    pub fn modality(&self) -> Option<&Arc<Modality>> {
        self.modality.as_ref()
    }

    fn universe(&self, kind: VarietyKind) -> Result<(u64, Option<&Arc<Modality>>), MstError> {
        if kind != VarietyKind::SubstructuresOfModality {
            return Ok((self.system.mask(), None));
        }
        let modality = self.modality.as_ref().ok_or_else(|| {
            MstError::Enumeration(
                ErrorInfo::new("modality-missing", "substructure enumeration needs a modality")
                    .with_context("system", self.system)
                    .with_hint("attach one with VarietyEnumerator::with_modality"),
            )
        })?;
        let reference = modality.structure();
        if *reference.system() != self.system {
            return Err(MstError::Enumeration(
                ErrorInfo::new(
                    "modality-system-mismatch",
                    "modality belongs to a different system",
                )
                .with_context("system", self.system)
                .with_context("modality_system", reference.system()),
            ));
        }
        Ok((reference.number(), Some(modality)))
    }

    /// Returns the accepted structures, at most `options.limit` of them.
    pub fn enumerate(
        &self,
        kind: VarietyKind,
        qualifier: Option<&dyn StructurePredicate>,
        options: &EnumerationOptions,
    ) -> Result<Vec<Structure>, MstError> {
        Ok(self.run(kind, qualifier, options)?.structures)
    }

    /// Like [`VarietyEnumerator::enumerate`], keeping the run bookkeeping.
    pub fn run(
        &self,
        kind: VarietyKind,
        qualifier: Option<&dyn StructurePredicate>,
        options: &EnumerationOptions,
    ) -> Result<EnumerationOutcome, MstError> {
        let (universe, modality) = self.universe(kind)?;
        if options.limit == 0 {
            return Ok(EnumerationOutcome::default());
        }
        if modality.is_none() && self.system.order() > TRACTABLE_ORDER {
            warn!(
                order = self.system.order(),
                %kind,
                "enumerating the full universe of a large order; constrain it with a modality"
            );
        }

        let space = CandidateSpace::new(universe);
        let budget = options
            .max_candidates
            .map_or(space.len(), |max| space.len().min(u128::from(max)));
        let truncated = budget < space.len();
        if budget == 0 {
            return Ok(EnumerationOutcome {
                truncated,
                ..EnumerationOutcome::default()
            });
        }
        let last = (budget - 1) as u64;

        debug!(
            system = %self.system,
            %kind,
            limit = options.limit,
            candidates = %budget,
            parallel = options.parallel,
            "enumeration started"
        );
        let scan = Scan {
            kind,
            system: self.system,
            space,
            modality,
            predicate: qualifier.unwrap_or(&AcceptAll),
            cancel: &self.cancel,
            limit: options.limit,
        };
        let mut outcome = if options.parallel {
            self.run_parallel(&scan, last, options)?
        } else {
            let chunk = scan.chunk(0, last)?;
            EnumerationOutcome {
                candidates_visited: chunk.scanned,
                cancelled: chunk.cancelled,
                structures: chunk.accepted.into_iter().map(|(_, s)| s).collect(),
                truncated: false,
            }
        };
        let exhausted = outcome.structures.len() < options.limit && !outcome.cancelled;
        outcome.truncated = truncated && exhausted;
        debug!(
            system = %self.system,
            %kind,
            visited = outcome.candidates_visited,
            results = outcome.structures.len(),
            cancelled = outcome.cancelled,
            truncated = outcome.truncated,
            "enumeration finished"
        );
        Ok(outcome)
    }

    fn run_parallel(
        &self,
        scan: &Scan<'_>,
        last: u64,
        options: &EnumerationOptions,
    ) -> Result<EnumerationOutcome, MstError> {
        let mut builder = rayon::ThreadPoolBuilder::new();
        if options.threads > 0 {
            builder = builder.num_threads(options.threads);
        }
        let pool = builder.build().map_err(thread_pool_error)?;
        let chunk_size = options.chunk_size.max(1);
        let batch_width = pool.current_num_threads().max(1) * 4;

        let mut outcome = EnumerationOutcome::default();
        let mut next = Some(0u64);
        while let Some(start) = next {
            let mut ranges = Vec::with_capacity(batch_width);
            let mut first = start;
            loop {
                let end = first.saturating_add(chunk_size - 1).min(last);
                ranges.push((first, end));
                if end == last {
                    next = None;
                    break;
                }
                first = end + 1;
                if ranges.len() == batch_width {
                    next = Some(first);
                    break;
                }
            }

            let partials: Vec<Result<ChunkOutcome, MstError>> = pool.install(|| {
                ranges
                    .par_iter()
                    .map(|&(first, end)| scan.chunk(first, end))
                    .collect()
            });
            for partial in partials {
                let partial = partial?;
                for (index, structure) in partial.accepted {
                    outcome.structures.push(structure);
                    if outcome.structures.len() >= options.limit {
                        outcome.candidates_visited = index.saturating_add(1);
                        return Ok(outcome);
                    }
                }
                outcome.candidates_visited += partial.scanned;
                if partial.cancelled {
                    outcome.cancelled = true;
                    return Ok(outcome);
                }
            }
        }
        Ok(outcome)
    }

    /// Runs the enumeration and packages it as a serializable report.
    pub fn enumerate_report(
        &self,
        kind: VarietyKind,
        qualifier: Option<&dyn StructurePredicate>,
        options: &EnumerationOptions,
    ) -> Result<EnumerationReport, MstError> {
        let outcome = self.run(kind, qualifier, options)?;
        let hash = structure_hash(&outcome.structures)?;
        Ok(EnumerationReport {
            kind,
            degree: self.system.degree(),
            order: self.system.order(),
            limit: options.limit,
            modality: match kind {
                VarietyKind::SubstructuresOfModality => self
                    .modality
                    .as_ref()
                    .map(|modality| modality.structure().structural_code().to_string()),
                _ => None,
            },
            candidates_visited: outcome.candidates_visited,
            truncated: outcome.truncated,
            cancelled: outcome.cancelled,
            records: outcome.structures.iter().map(Structure::to_record).collect(),
            hash,
        })
    }
}

/// One-shot enumeration over `system` with default options and `limit`.
///
/// [`VarietyKind::SubstructuresOfModality`] needs `modality`.
pub fn enumerate(
    system: AlgebraicSystem,
    kind: VarietyKind,
    modality: Option<Arc<Modality>>,
    qualifier: Option<&dyn StructurePredicate>,
    limit: usize,
) -> Result<Vec<Structure>, MstError> {
    let mut enumerator = VarietyEnumerator::new(system);
    if let Some(modality) = modality {
        enumerator = enumerator.with_modality(modality);
    }
    enumerator.enumerate(kind, qualifier, &EnumerationOptions::with_limit(limit))
}
