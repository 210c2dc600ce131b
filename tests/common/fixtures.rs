//! Server payloads and files used across tests.

use bytes::Bytes;
use serde_json::{json, Value};

use resume_client::models::{SelectedFile, ValidFile};
use resume_client::validator;

pub const MIB: usize = 1024 * 1024;

pub fn summary_json(id: i64, filename: &str) -> Value {
    json!({
        "id": id,
        "filename": filename,
        "uploaded_at": "2024-05-01T09:30:00",
        "name": "Jane Doe",
        "email": "jane@example.com"
    })
}

/// Detail as returned right after upload, before analysis has run.
pub fn detail_json(id: i64) -> Value {
    json!({
        "id": id,
        "filename": "jane_doe.pdf",
        "uploaded_at": "2024-05-01T09:30:00",
        "raw_text": "Jane Doe\nBackend Engineer",
        "summary": null,
        "contact_info": {
            "name": "Jane Doe",
            "email": "jane@example.com",
            "phone": null,
            "linkedin": "linkedin.com/in/janedoe"
        },
        "work_experience": [{
            "company": "Acme",
            "role": "Engineer",
            "start_date": "2021-01",
            "end_date": null,
            "responsibilities": ["APIs"],
            "achievements": []
        }],
        "education": [],
        "skills": {
            "technical": [{"name": "Rust", "proficiency": "Advanced"}],
            "soft": [],
            "tools": [],
            "languages": ["English"]
        },
        "projects": [],
        "certifications": [],
        "awards": []
    })
}

pub fn analysed_detail_json(id: i64) -> Value {
    let mut detail = detail_json(id);
    detail["llm_analysis"] = json!({
        "resume_rating": 7.5,
        "overall_feedback": "Solid backend profile.",
        "strength_areas": ["APIs"],
        "improvement_areas": ["Testing"],
        "upskill_suggestions": [
            {"skill": "Kubernetes", "reason": "Deployment", "resources": []}
        ],
        "suggested_keywords_for_ats": ["Rust"],
        "potential_roles": ["Platform Engineer"]
    });
    detail
}

pub fn pdf_file(name: &str, size: usize) -> SelectedFile {
    SelectedFile::new(name, "application/pdf", Bytes::from(vec![b'%'; size]))
}

pub fn docx_file(name: &str, size: usize) -> SelectedFile {
    SelectedFile::new(
        name,
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        Bytes::from(vec![b'P'; size]),
    )
}

pub fn valid_pdf(name: &str, size: usize) -> ValidFile {
    validator::validate(pdf_file(name, size)).expect("fixture should validate")
}
