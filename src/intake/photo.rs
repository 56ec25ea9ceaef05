//! Photo intake: holds at most one homework image in memory and asks the
//! producer to explain it.

use std::path::Path;

use dioxus::logger::tracing::{info, warn};

use crate::{
    error::HelperError,
    producer::{HelperInput, ResponseProducer},
    session::SessionState,
    state::StateHandle,
    utils::to_data_uri,
};

pub const CAPTURE_WIDTH: u32 = 400;
pub const CAPTURE_HEIGHT: u32 = 300;

const CAPTURE_LINES: [&str; 3] = ["Sample Math Problem", "2/3 + 1/6 = ?", "Show your work below:"];

#[derive(Debug, Clone, PartialEq)]
pub enum ImageSource {
    Upload { name: String },
    Camera,
}

/// An image ready to be displayed and analysed.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingImage {
    pub data_uri: String,
    pub media_type: String,
    pub byte_len: usize,
    pub source: ImageSource,
}

/// A file handed over by the picker or a drop.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub name: String,
    /// Media type as declared by the platform, if it declared one.
    pub media_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl UploadedFile {
    /// The declared media type, or one guessed from the file extension.
    pub fn effective_media_type(&self) -> Option<String> {
        if let Some(t) = self.media_type.as_deref().filter(|t| !t.is_empty()) {
            return Some(t.to_ascii_lowercase());
        }
        let ext = Path::new(&self.name).extension()?.to_str()?.to_ascii_lowercase();
        let guessed = match ext.as_str() {
            "jpg" | "jpeg" => "image/jpeg",
            "png" => "image/png",
            "webp" => "image/webp",
            "gif" => "image/gif",
            "bmp" => "image/bmp",
            "svg" => "image/svg+xml",
            "heic" => "image/heic",
            _ => return None,
        };
        Some(guessed.to_string())
    }
}

/// Builds the stand-in for a camera shot: a grey 400x300 card with a sample
/// problem written on it.
pub fn placeholder_capture() -> PendingImage {
    let cx = CAPTURE_WIDTH / 2;
    let text: String = CAPTURE_LINES
        .iter()
        .zip([120, 150, 180])
        .map(|(line, y)| format!(r#"<text x="{cx}" y="{y}">{}</text>"#, escape_xml(line)))
        .collect();
    let svg = format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}"><rect width="{w}" height="{h}" fill="#f3f4f6"/><g fill="#6b7280" font-family="Arial" font-size="16" text-anchor="middle">{text}</g></svg>"##,
        w = CAPTURE_WIDTH,
        h = CAPTURE_HEIGHT,
    );
    PendingImage {
        data_uri: to_data_uri("image/svg+xml", svg.as_bytes()),
        media_type: "image/svg+xml".into(),
        byte_len: svg.len(),
        source: ImageSource::Camera,
    }
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

/// Proof that an analysis was started, and for which image.
#[derive(Debug, Clone)]
pub struct AnalysisTicket {
    generation: u64,
    pub image: PendingImage,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PhotoIntake {
    pub image: Option<PendingImage>,
    pub analyzing: bool,
    pub drag_active: bool,
    pub notice: Option<HelperError>,
    max_upload_bytes: u64,
    // Bumped by `clear`; analyses started under an older generation are stale.
    generation: u64,
}

impl PhotoIntake {
    pub fn new(max_upload_bytes: u64) -> Self {
        Self {
            image: None,
            analyzing: false,
            drag_active: false,
            notice: None,
            max_upload_bytes,
            generation: 0,
        }
    }

    /// Stores `file` as the pending image if it is an image within the size
    /// limit. Rejected files leave the pending image untouched.
    pub fn accept_file(&mut self, file: UploadedFile) -> Result<(), HelperError> {
        self.drag_active = false;
        let result = self.validate(&file);
        match result {
            Ok(media_type) => {
                info!("accepted {} ({media_type}, {} bytes)", file.name, file.bytes.len());
                self.image = Some(PendingImage {
                    data_uri: to_data_uri(&media_type, &file.bytes),
                    media_type,
                    byte_len: file.bytes.len(),
                    source: ImageSource::Upload { name: file.name },
                });
                self.notice = None;
                Ok(())
            }
            Err(e) => {
                warn!("rejected {}: {e}", file.name);
                self.notice = Some(e.clone());
                Err(e)
            }
        }
    }

    fn validate(&self, file: &UploadedFile) -> Result<String, HelperError> {
        let media_type = match file.effective_media_type() {
            Some(t) if t.starts_with("image/") => t,
            _ => {
                return Err(HelperError::invalid_input(format!(
                    "\"{}\" is not an image. Please choose a JPG, PNG or WEBP photo.",
                    file.name
                )));
            }
        };
        if file.bytes.len() as u64 > self.max_upload_bytes {
            return Err(HelperError::invalid_input(format!(
                "\"{}\" is larger than the {} byte limit.",
                file.name, self.max_upload_bytes
            )));
        }
        Ok(media_type)
    }

    /// Replaces the pending image with the camera placeholder.
    pub fn capture(&mut self) {
        self.image = Some(placeholder_capture());
        self.notice = None;
    }

    /// Drops the pending image. Any analysis still running for it is
    /// discarded when it completes.
    pub fn clear(&mut self) {
        self.image = None;
        self.notice = None;
        self.drag_active = false;
        if self.analyzing {
            info!("discarding running analysis");
            self.analyzing = false;
        }
        self.generation += 1;
    }

    /// Resets what the user sees when they navigate away. A running analysis
    /// keeps going and still delivers.
    pub fn leave(&mut self) {
        self.image = None;
        self.notice = None;
        self.drag_active = false;
    }

    pub fn set_drag_active(&mut self, active: bool) {
        self.drag_active = active;
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    /// Starts an analysis. `None` if there is nothing to analyse or one is
    /// already running.
    pub fn begin_analysis(&mut self) -> Option<AnalysisTicket> {
        if self.analyzing {
            return None;
        }
        let image = self.image.clone()?;
        self.analyzing = true;
        self.notice = None;
        Some(AnalysisTicket {
            generation: self.generation,
            image,
        })
    }

    /// Ends the analysis behind `ticket`. Returns false when the image was
    /// cleared in the meantime and the result should be dropped.
    pub fn finish_analysis(&mut self, ticket: &AnalysisTicket) -> bool {
        if ticket.generation != self.generation {
            return false;
        }
        self.analyzing = false;
        true
    }
}

/// Runs an analysis of the pending image and forwards the result to the
/// session. Returns whether an analysis was started.
pub async fn analyze_photo<P, S>(mut photo: P, mut session: S, producer: &dyn ResponseProducer) -> bool
where
    P: StateHandle<PhotoIntake>,
    S: StateHandle<SessionState>,
{
    let Some(ticket) = photo.apply(|p| p.begin_analysis()) else {
        return false;
    };
    let result = producer.produce(HelperInput::Image(ticket.image.clone())).await;
    let current = photo.apply(|p| p.finish_analysis(&ticket));
    match result {
        Ok(response) if current => session.apply(|s| s.receive_photo_result(response)),
        Ok(_) => info!("image was cleared during analysis, dropping response"),
        Err(e) if current => {
            warn!("photo analysis failed: {e}");
            photo.apply(|p| p.notice = Some(e));
        }
        Err(e) => warn!("stale photo analysis failed: {e}"),
    }
    true
}
