//! Thin CSV ingestion for the four tabular input streams. Not part of the
//! core's public contract: the core takes already-parsed `Universe` values,
//! this module is the thin external collaborator that produces them.

use crate::domain::{Classroom, Course, Instructor, InstructorCourse, Universe};
use crate::error::SchedulerError;
use csv::ReaderBuilder;
use serde::Deserialize;
use std::io::Read;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct CourseRow {
    name: String,
    code: String,
    career: String,
    semester: String,
    section: String,
    #[serde(rename = "type")]
    kind: String,
}

#[derive(Debug, Deserialize)]
struct ClassroomRow {
    id: String,
    name: String,
}

#[derive(Debug, Deserialize)]
struct InstructorRow {
    name: String,
    registration: String,
    hora_entrada: String,
    hora_salida: String,
}

#[derive(Debug, Deserialize)]
struct RelationRow {
    registro: String,
    codigo: String,
}

fn read_rows<T>(path: &Path, stream: &'static str) -> Result<Vec<T>, SchedulerError>
where
    T: for<'de> Deserialize<'de>,
{
    let file = std::fs::File::open(path).map_err(|source| SchedulerError::Io {
        path: path.display().to_string(),
        source,
    })?;
    read_rows_from(file, stream)
}

fn read_rows_from<T, R>(source: R, stream: &'static str) -> Result<Vec<T>, SchedulerError>
where
    T: for<'de> Deserialize<'de>,
    R: Read,
{
    let mut reader = ReaderBuilder::new().has_headers(true).from_reader(source);

    reader
        .deserialize()
        .collect::<Result<Vec<T>, csv::Error>>()
        .map_err(|source| SchedulerError::Loader { stream, source })
}

/// Loads `courses.csv` (columns `name, code, career, semester, section, type`).
pub fn load_courses(path: impl AsRef<Path>) -> Result<Vec<Course>, SchedulerError> {
    let rows: Vec<CourseRow> = read_rows(path.as_ref(), "courses")?;
    Ok(rows
        .into_iter()
        .map(|r| Course {
            name: r.name,
            code: r.code,
            career: r.career,
            semester: r.semester,
            section: r.section,
            kind: r.kind,
        })
        .collect())
}

/// Loads `classrooms.csv` (columns `id, name`).
pub fn load_classrooms(path: impl AsRef<Path>) -> Result<Vec<Classroom>, SchedulerError> {
    let rows: Vec<ClassroomRow> = read_rows(path.as_ref(), "classrooms")?;
    Ok(rows
        .into_iter()
        .map(|r| Classroom {
            id: r.id,
            name: r.name,
        })
        .collect())
}

/// Loads `instructors.csv` (columns `name, registration, hora_entrada,
/// hora_salida`).
pub fn load_instructors(path: impl AsRef<Path>) -> Result<Vec<Instructor>, SchedulerError> {
    let rows: Vec<InstructorRow> = read_rows(path.as_ref(), "instructors")?;
    Ok(rows
        .into_iter()
        .map(|r| Instructor {
            name: r.name,
            registration: r.registration,
            shift_start: r.hora_entrada,
            shift_end: r.hora_salida,
        })
        .collect())
}

/// Loads `relations.csv` (columns `registro, codigo`), the instructor ->
/// course eligibility relation.
pub fn load_relations(path: impl AsRef<Path>) -> Result<Vec<InstructorCourse>, SchedulerError> {
    let rows: Vec<RelationRow> = read_rows(path.as_ref(), "relations")?;
    Ok(rows
        .into_iter()
        .map(|r| InstructorCourse {
            instructor_registration: r.registro,
            course_code: r.codigo,
        })
        .collect())
}

/// Loads all four streams and builds the immutable `Universe`, using the
/// given slot list (caller-overridable, defaulted by the config layer).
pub fn load_universe(
    courses_path: impl AsRef<Path>,
    classrooms_path: impl AsRef<Path>,
    instructors_path: impl AsRef<Path>,
    relations_path: impl AsRef<Path>,
    slots: Vec<crate::domain::Slot>,
) -> Result<Universe, SchedulerError> {
    let courses = load_courses(courses_path)?;
    let classrooms = load_classrooms(classrooms_path)?;
    let instructors = load_instructors(instructors_path)?;
    let relations = load_relations(relations_path)?;

    Ok(Universe::new(
        courses,
        classrooms,
        instructors,
        slots,
        &relations,
    ))
}
