const MB: u64 = 1024 * 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadKind {
    ProfileImage,
    Resume,
    CertificationDocument,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UploadPolicyError {
    #[error("File name is required")]
    MissingFileName,

    #[error("File name exceeds {0} characters")]
    FileNameTooLong(usize),

    #[error("File is empty")]
    EmptyFile,

    #[error("File exceeds the {0} byte limit")]
    TooLarge(u64),

    #[error("Unsupported file extension. Allowed: {0}")]
    UnsupportedExtension(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadPolicy {
    pub max_file_size_bytes: u64,
    pub max_file_name_len: usize,
    pub allowed_extensions: &'static [&'static str],
    /// Sub-directory of the media root the files land in.
    pub folder: &'static str,
}

impl UploadPolicy {
    pub const IMAGE_EXTENSIONS: &'static [&'static str] = &["jpg", "jpeg", "png", "webp"];
    pub const RESUME_EXTENSIONS: &'static [&'static str] = &["pdf", "doc", "docx"];
    pub const DOCUMENT_EXTENSIONS: &'static [&'static str] = &["pdf", "jpg", "jpeg", "png", "webp"];

    pub fn for_kind(kind: UploadKind) -> Self {
        match kind {
            UploadKind::ProfileImage => Self {
                max_file_size_bytes: 5 * MB,
                max_file_name_len: 255,
                allowed_extensions: Self::IMAGE_EXTENSIONS,
                folder: "profile_images",
            },
            UploadKind::Resume => Self {
                max_file_size_bytes: 10 * MB,
                max_file_name_len: 255,
                allowed_extensions: Self::RESUME_EXTENSIONS,
                folder: "resumes",
            },
            UploadKind::CertificationDocument => Self {
                max_file_size_bytes: 10 * MB,
                max_file_name_len: 255,
                allowed_extensions: Self::DOCUMENT_EXTENSIONS,
                folder: "certifications",
            },
        }
    }

    /// Checks name, size and extension. Returns the lower-cased extension.
    pub fn validate(&self, file_name: &str, size: u64) -> Result<String, UploadPolicyError> {
        let file_name = file_name.trim();

        if file_name.is_empty() {
            return Err(UploadPolicyError::MissingFileName);
        }

        if file_name.chars().count() > self.max_file_name_len {
            return Err(UploadPolicyError::FileNameTooLong(self.max_file_name_len));
        }

        if size == 0 {
            return Err(UploadPolicyError::EmptyFile);
        }

        if size > self.max_file_size_bytes {
            return Err(UploadPolicyError::TooLarge(self.max_file_size_bytes));
        }

        match extension_of(file_name) {
            Some(ext) if self.allowed_extensions.contains(&ext.as_str()) => Ok(ext),
            _ => Err(UploadPolicyError::UnsupportedExtension(
                self.allowed_extensions.join(", "),
            )),
        }
    }
}

pub fn extension_of(file_name: &str) -> Option<String> {
    let (stem, ext) = file_name.rsplit_once('.')?;
    if stem.is_empty() || ext.is_empty() {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}

pub fn is_image_extension(ext: &str) -> bool {
    UploadPolicy::IMAGE_EXTENSIONS.contains(&ext)
}
