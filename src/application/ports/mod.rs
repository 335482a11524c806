mod extraction_strategy;

pub use extraction_strategy::{ExtractionStrategy, RawExtraction, StrategyError, StrategyKind};
