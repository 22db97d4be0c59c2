/// Placeholder avatar service (person-like "avataaars" style).
const DICEBEAR_BASE: &str = "https://api.dicebear.com/7.x/avataaars/png";

pub const DEFAULT_AVATAR_SIZE: u32 = 400;

/// Profile image URL, stable per doctor id.
pub fn doctor_image_url(doctor_id: &str, size: u32) -> String {
    format!(
        "{DICEBEAR_BASE}?seed={}&size={size}",
        urlencoding::encode(doctor_id)
    )
}
