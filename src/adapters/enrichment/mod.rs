//! Enrichment adapter module. Implements EnrichmentPort and maps raw records.

pub mod mapper;
pub mod scrapin;

pub use mapper::{CompanyFacts, PersonRecord, PositionRecord, company_facts, domain_from_url};
pub use scrapin::ScrapinAdapter;
