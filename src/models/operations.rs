use super::presentation::{Slide, SlideContent};

/// A structural edit applied to a presentation's slide list.
///
/// Indices are validated against the current list before anything is touched,
/// so a failed operation leaves the slides exactly as they were.
#[derive(Debug, Clone)]
pub enum SlideOperation {
    /// Insert a duplicate of the slide at `index` directly after it.
    Copy { index: usize },
    /// Remove the slide at `index`. The last remaining slide cannot be removed.
    Delete { index: usize },
    /// Replace the content of the slide at `index`.
    UpdateContent { index: usize, content: SlideContent },
    /// Move the slide at `from` so it ends up at position `to`.
    Reorder { from: usize, to: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperationError {
    IndexOutOfRange { index: usize, len: usize },
    EmptyPresentation,
}

impl std::fmt::Display for OperationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OperationError::IndexOutOfRange { index, len } => {
                write!(f, "slide index {index} out of range (presentation has {len} slides)")
            }
            OperationError::EmptyPresentation => {
                write!(f, "cannot remove the last slide of a presentation")
            }
        }
    }
}

impl std::error::Error for OperationError {}

impl SlideOperation {
    /// Apply the operation in place. All bounds checks happen before the
    /// first mutation; on `Err` the slice is untouched.
    pub fn apply(self, slides: &mut Vec<Slide>) -> Result<(), OperationError> {
        let len = slides.len();
        match self {
            SlideOperation::Copy { index } => {
                check_index(index, len)?;
                let copy = slides[index].clone();
                slides.insert(index + 1, copy);
            }
            SlideOperation::Delete { index } => {
                check_index(index, len)?;
                if len == 1 {
                    return Err(OperationError::EmptyPresentation);
                }
                slides.remove(index);
            }
            SlideOperation::UpdateContent { index, content } => {
                check_index(index, len)?;
                let slide = &mut slides[index];
                slide.title = content.title;
                slide.bullets = content.bullets;
                if let Some(notes) = content.notes {
                    slide.notes = Some(notes);
                }
                if let Some(image_ref) = content.image_ref {
                    slide.image_ref = Some(image_ref);
                }
            }
            SlideOperation::Reorder { from, to } => {
                check_index(from, len)?;
                check_index(to, len)?;
                let slide = slides.remove(from);
                slides.insert(to, slide);
            }
        }
        Ok(())
    }
}

fn check_index(index: usize, len: usize) -> Result<(), OperationError> {
    if index < len {
        Ok(())
    } else {
        Err(OperationError::IndexOutOfRange { index, len })
    }
}
