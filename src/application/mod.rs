// Portfolio, performance, cash-flow and maintenance aggregation
pub mod data_aggregation;

// Valuation, market analysis and value prediction
pub mod property_valuation;
