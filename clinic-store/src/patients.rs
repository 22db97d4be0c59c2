//! Read-only patient directory and appointment queues for the doctor dashboard.

use tracing::debug;

use crate::structs::patient::{
    ActivityEntry, ChronicCondition, ConditionSeverity, PatientDetail, PatientRow, PatientStatus,
    PendingRequest, Prescription, UpcomingAppointment,
};

#[derive(Debug, Clone)]
pub struct PatientDirectory {
    patients: Vec<PatientRow>,
    pending: Vec<PendingRequest>,
    upcoming: Vec<UpcomingAppointment>,
}

impl Default for PatientDirectory {
    fn default() -> Self {
        Self {
            patients: seed_patients(),
            pending: seed_pending_requests(),
            upcoming: seed_upcoming(),
        }
    }
}

impl PatientDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Case-insensitive substring match on name, email and chart number.
    /// A blank query returns every patient.
    pub fn search(&self, query: &str) -> Vec<PatientRow> {
        if query.trim().is_empty() {
            return self.patients.clone();
        }
        let q = query.to_lowercase();
        let hits: Vec<PatientRow> = self
            .patients
            .iter()
            .filter(|p| {
                p.name.to_lowercase().contains(&q)
                    || p.email.to_lowercase().contains(&q)
                    || p.patient_id.to_lowercase().contains(&q)
            })
            .cloned()
            .collect();
        debug!(target: "clinic_store::patients", query, hits = hits.len(), "search");
        hits
    }

    pub fn find(&self, id: &str) -> Option<PatientRow> {
        self.patients.iter().find(|p| p.id == id).cloned()
    }

    pub fn detail(&self, id: &str) -> Option<PatientDetail> {
        self.find(id).map(clinical_panel)
    }

    pub fn pending_requests(&self) -> Vec<PendingRequest> {
        self.pending.clone()
    }

    pub fn upcoming_appointments(&self) -> Vec<UpcomingAppointment> {
        self.upcoming.clone()
    }
}

// Every patient currently shares the same demo chart.
fn clinical_panel(row: PatientRow) -> PatientDetail {
    PatientDetail {
        row,
        patient_since: "Jan 2021".into(),
        blood_type: "A+".into(),
        weight: "78kg".into(),
        height: "182cm".into(),
        chronic_conditions: vec![
            ChronicCondition {
                name: "Hypertension".into(),
                variant: ConditionSeverity::Red,
            },
            ChronicCondition {
                name: "Asthma".into(),
                variant: ConditionSeverity::Blue,
            },
        ],
        prescriptions: vec![
            Prescription {
                name: "Lisinopril 10mg".into(),
                instructions: "1 tablet daily in the morning".into(),
            },
            Prescription {
                name: "Albuterol Inhaler".into(),
                instructions: "2 puffs every 4-6 hours as needed".into(),
            },
        ],
        recent_activity: vec![
            ActivityEntry {
                title: "Annual Checkup".into(),
                date: "Oct 12, 2023".into(),
                by: "Dr. Sarah Chen".into(),
                note: Some(
                    "Blood pressure stable. Patient reports better sleep patterns...".into(),
                ),
            },
            ActivityEntry {
                title: "Lab Results: Blood Panel".into(),
                date: "Aug 20, 2023".into(),
                by: "General Labs".into(),
                note: None,
            },
        ],
    }
}

fn seed_patients() -> Vec<PatientRow> {
    use PatientStatus::*;

    let rows: [(&str, &str, &str, &str, u32, &str, &str, PatientStatus); 9] = [
        ("1", "James Wilson", "j.wilson@example.com", "#MD-92831", 42, "Male", "Oct 12, 2023", Confirmed),
        ("2", "Emma Thompson", "e.thompson@example.com", "#MD-92832", 34, "Female", "Oct 10, 2023", Pending),
        ("3", "Michael Roberts", "m.roberts@example.com", "#MR-4092", 55, "Male", "Oct 8, 2023", FollowUp),
        ("4", "Michael Brown", "m.brown@example.com", "#MD-92833", 58, "Male", "Oct 8, 2023", FollowUp),
        ("5", "Sarah Davis", "s.davis@example.com", "#MD-92834", 29, "Female", "Oct 5, 2023", Confirmed),
        ("6", "Elena Rodriguez", "e.rodriguez@example.com", "#MD-92835", 38, "Female", "Oct 4, 2023", Confirmed),
        ("7", "Thomas Miller", "t.miller@example.com", "#MD-92836", 62, "Male", "Oct 3, 2023", Confirmed),
        ("8", "Sophia Lane", "s.lane@example.com", "#MD-92837", 45, "Female", "Oct 2, 2023", Pending),
        ("9", "Aria Thorne", "a.thorne@example.com", "#MD-92838", 31, "Female", "Oct 1, 2023", Pending),
    ];

    rows.into_iter()
        .map(
            |(id, name, email, patient_id, age, gender, last_visit, status)| PatientRow {
                id: id.into(),
                name: name.into(),
                email: email.into(),
                patient_id: patient_id.into(),
                age,
                gender: gender.into(),
                last_visit: last_visit.into(),
                status,
            },
        )
        .collect()
}

fn seed_pending_requests() -> Vec<PendingRequest> {
    vec![
        PendingRequest {
            id: "pr1".into(),
            patient_id: "3".into(),
            name: "Michael Roberts".into(),
            requested: "Today, 02:45 PM".into(),
            tag: "URGENT".into(),
            reason: "Persistent chest pain and shortness of breath for the last two days.".into(),
        },
        PendingRequest {
            id: "pr2".into(),
            patient_id: "9".into(),
            name: "Aria Thorne".into(),
            requested: "Mon, 12 Oct • 10:00 AM".into(),
            tag: "CHECK-UP".into(),
            reason: "Annual cardiac screening and refill for medication.".into(),
        },
    ]
}

fn seed_upcoming() -> Vec<UpcomingAppointment> {
    let slot = |id: &str, patient_id: &str, time: &str, period: &str, name: &str, kind: &str| {
        UpcomingAppointment {
            id: id.into(),
            patient_id: patient_id.into(),
            time: time.into(),
            period: period.into(),
            name: name.into(),
            kind: kind.into(),
            in_progress: false,
            is_telehealth: false,
        }
    };

    vec![
        slot("u1", "1", "09:00", "AM", "James Wilson", "General Checkup • In-Person"),
        UpcomingAppointment {
            is_telehealth: true,
            ..slot("u2", "6", "10:30", "AM", "Elena Rodriguez", "Follow-up • Telehealth")
        },
        UpcomingAppointment {
            in_progress: true,
            ..slot("u3", "7", "02:00", "PM", "Thomas Miller", "Diagnostic Review • In-Person")
        },
        slot("u4", "8", "03:30", "PM", "Sophia Lane", "Consultation • In-Person"),
    ]
}
