//! Output formatting utilities for CLI operations.

use std::io::{self, Write};

use tutorlink::marketplace::models::{GradeLevel, Testimonial};
use tutorlink::rating::describe;
use tutorlink::{ClientError, SessionContext, TutorPage, TutorProfile};

/// Maps a write failure into the CLI's error type.
pub fn io_error(error: &io::Error) -> ClientError {
    ClientError::Io {
        message: error.to_string(),
    }
}

/// Writes one page of tutors followed by the pagination footer.
///
/// # Errors
///
/// Returns [`ClientError::Io`] when the writer fails.
pub fn write_tutor_page<W: Write>(writer: &mut W, page: &TutorPage) -> Result<(), ClientError> {
    if page.items.is_empty() {
        writeln!(writer, "No tutors match this filter.").map_err(|e| io_error(&e))?;
    }
    for tutor in &page.items {
        writeln!(
            writer,
            "  {name} | {subjects} | {rate}/hr | {rating}",
            name = tutor.name,
            subjects = tutor.subjects.join(", "),
            rate = tutor.hourly_rate,
            rating = describe(&tutor.rating),
        )
        .map_err(|e| io_error(&e))?;
    }

    writeln!(writer).map_err(|e| io_error(&e))?;
    writeln!(writer, "{}", page.footer.range().label()).map_err(|e| io_error(&e))?;
    if !page.footer.window().is_empty() {
        writeln!(writer, "{}", page.footer.render_controls()).map_err(|e| io_error(&e))?;
    }
    Ok(())
}

/// Writes a full tutor profile.
///
/// # Errors
///
/// Returns [`ClientError::Io`] when the writer fails.
pub fn write_tutor_detail<W: Write>(
    writer: &mut W,
    tutor: &TutorProfile,
) -> Result<(), ClientError> {
    let grades = tutor
        .grade_levels
        .iter()
        .map(GradeLevel::as_str)
        .collect::<Vec<_>>()
        .join(", ");

    writeln!(writer, "{}", tutor.name).map_err(|e| io_error(&e))?;
    writeln!(writer, "Subjects: {}", tutor.subjects.join(", ")).map_err(|e| io_error(&e))?;
    if !grades.is_empty() {
        writeln!(writer, "Grades: {grades}").map_err(|e| io_error(&e))?;
    }
    writeln!(
        writer,
        "Rate: {}/hr ({})",
        tutor.hourly_rate,
        tutor.mode.as_str()
    )
    .map_err(|e| io_error(&e))?;
    if let Some(location) = &tutor.location {
        writeln!(writer, "Location: {location}").map_err(|e| io_error(&e))?;
    }
    writeln!(writer, "Rating: {}", describe(&tutor.rating)).map_err(|e| io_error(&e))?;
    if let Some(bio) = tutor.bio.as_deref().filter(|text| !text.trim().is_empty()) {
        writeln!(writer).map_err(|e| io_error(&e))?;
        writeln!(writer, "{bio}").map_err(|e| io_error(&e))?;
    }
    Ok(())
}

/// Writes the signed-in account and, for tutors, their profile status.
///
/// # Errors
///
/// Returns [`ClientError::Io`] when the writer fails.
pub fn write_session<W: Write>(
    writer: &mut W,
    session: &SessionContext,
) -> Result<(), ClientError> {
    let Some(user) = session.user() else {
        return writeln!(writer, "Not signed in.").map_err(|e| io_error(&e));
    };
    writeln!(writer, "Signed in as {} <{}>", user.name, user.email).map_err(|e| io_error(&e))?;
    writeln!(writer, "Role: {}", user.role.as_str()).map_err(|e| io_error(&e))?;
    if user.is_tutor() {
        let status = session.profile().map_or_else(
            || "No tutor profile yet.".to_owned(),
            |profile| {
                let rating = describe(&profile.rating);
                format!("Tutor profile: {} ({rating})", profile.name)
            },
        );
        writeln!(writer, "{status}").map_err(|e| io_error(&e))?;
    }
    Ok(())
}

/// Writes testimonials, one per line.
///
/// # Errors
///
/// Returns [`ClientError::Io`] when the writer fails.
pub fn write_testimonials<W: Write>(
    writer: &mut W,
    testimonials: &[Testimonial],
) -> Result<(), ClientError> {
    if testimonials.is_empty() {
        return writeln!(writer, "No testimonials yet.").map_err(|e| io_error(&e));
    }
    for testimonial in testimonials {
        writeln!(
            writer,
            "\"{}\" ({})",
            testimonial.body.trim(),
            testimonial.author_name
        )
        .map_err(|e| io_error(&e))?;
    }
    Ok(())
}
