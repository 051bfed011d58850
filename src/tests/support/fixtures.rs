use crate::portfolio::application::domain::entities::{
    AwardDraft, EventDraft, EventType, GrantDraft, GrantStatus, PublicationDraft,
};

pub fn grant_draft(title: &str) -> GrantDraft {
    GrantDraft {
        title: title.to_string(),
        funding_agency: "DST-SERB".to_string(),
        amount: Some("₹ 24,00,000".to_string()),
        period: "2021 - 2024".to_string(),
        status: GrantStatus::Ongoing,
        description: None,
    }
}

pub fn publication_draft(title: &str, year: i32) -> PublicationDraft {
    PublicationDraft {
        title: title.to_string(),
        authors: "R. Rao, S. Iyer".to_string(),
        journal: "IEEE Transactions on Power Systems".to_string(),
        year,
        doi: None,
        link: None,
    }
}

pub fn award_draft(title: &str, year: i32) -> AwardDraft {
    AwardDraft {
        title: title.to_string(),
        organization: "IEEE".to_string(),
        year,
        description: None,
    }
}

pub fn event_draft(title: &str, date: &str) -> EventDraft {
    EventDraft {
        title: title.to_string(),
        kind: EventType::Workshop,
        date: date.to_string(),
        location: Some("Chennai".to_string()),
        description: None,
    }
}
