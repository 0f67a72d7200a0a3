//! Sample catalog used by tests and the `mock` feature.

use crate::content::{ComplianceStatus, ContentType};

use super::catalog::CatalogEntry;

/// A small, varied catalog mirroring the kind of content the service hosts.
pub fn sample_catalog() -> Vec<CatalogEntry> {
    vec![
        CatalogEntry {
            id: 1,
            title: "Summer Sale Email Campaign".to_string(),
            body: "Summer savings are here. Get up to 50% off on all summer products before August 31st."
                .to_string(),
            content_type: ContentType::Email,
            campaign_name: Some("Summer Savings".to_string()),
            audience: Some("B2C".to_string()),
            compliance_status: ComplianceStatus::Approved,
            source: Some("crm".to_string()),
            tags: vec!["sale".to_string(), "summer".to_string(), "promotion".to_string()],
            is_active: true,
        },
        CatalogEntry {
            id: 2,
            title: "Q4 Enterprise Solutions".to_string(),
            body: "Discover our latest enterprise solutions for Q4. Streamline operations and increase ROI."
                .to_string(),
            content_type: ContentType::Whitepaper,
            campaign_name: Some("Enterprise Engagement".to_string()),
            audience: Some("B2B".to_string()),
            compliance_status: ComplianceStatus::Approved,
            source: Some("content-team".to_string()),
            tags: vec!["enterprise".to_string(), "solutions".to_string()],
            is_active: true,
        },
        CatalogEntry {
            id: 3,
            title: "Win-Back Email".to_string(),
            body: "At-risk customers benefit from personalized win-back campaigns with tailored offers."
                .to_string(),
            content_type: ContentType::Email,
            campaign_name: Some("Win-Back".to_string()),
            audience: Some("B2C".to_string()),
            compliance_status: ComplianceStatus::Approved,
            source: None,
            tags: vec!["at-risk".to_string(), "retention".to_string()],
            is_active: true,
        },
        CatalogEntry {
            id: 4,
            title: "SMB Growth Case Study".to_string(),
            body: "SMB customers respond well to ROI-focused messaging and concrete case studies."
                .to_string(),
            content_type: ContentType::Social,
            campaign_name: Some("SMB Growth".to_string()),
            audience: Some("SMB".to_string()),
            compliance_status: ComplianceStatus::Pending,
            source: None,
            tags: vec!["smb".to_string(), "roi".to_string(), "case-study".to_string()],
            is_active: true,
        },
        CatalogEntry {
            id: 5,
            title: "Retired Spring Promo".to_string(),
            body: "Spring promotion copy kept for archival purposes only.".to_string(),
            content_type: ContentType::Ad,
            campaign_name: Some("Spring Promo".to_string()),
            audience: Some("B2C".to_string()),
            compliance_status: ComplianceStatus::Approved,
            source: None,
            tags: vec!["archive".to_string()],
            is_active: false,
        },
    ]
}
