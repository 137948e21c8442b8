//! Scripted roster walkthrough
//!
//! Adds three students, removes one, updates another, and prints the roster
//! after each step.

use std::io::Write;

use tracing::info;

use crate::client::StudentManagementClient;
use crate::system::{RosterResult, StudentSystem};

/// Totals observed at each roster display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoReport {
    pub after_register: usize,
    pub after_remove: usize,
    pub after_update: usize,
}

/// Run the walkthrough against `system`, rendering progress to `out`.
pub fn run_demo(
    system: &mut dyn StudentSystem,
    out: &mut dyn Write,
) -> RosterResult<DemoReport> {
    let mut client = StudentManagementClient::new(system);

    writeln!(out, "Welcome to Student Management System")?;
    writeln!(out, "====================================")?;

    client.register_new_student(1001, "John Smith", 3.75);
    client.register_new_student(1002, "Emily Johnson", 3.92);
    client.register_new_student(1003, "Michael Brown", 3.45);

    heading(out, "Student Records:", "----------------")?;
    client.display_all_students(out)?;
    let after_register = client.total_students();

    writeln!(out, "\nRemoving student with ID 1002...")?;
    client.remove_student(1002);

    heading(out, "Updated Student Records:", "-------------------------")?;
    client.display_all_students(out)?;
    let after_remove = client.total_students();

    writeln!(out, "\nUpdating details for student with ID 1003...")?;
    client.update_student_details(1003, "Michael Brown Jr.", 3.85);

    heading(out, "Final Student Records:", "-----------------------")?;
    client.display_all_students(out)?;
    let after_update = client.total_students();

    info!("Demo complete: {} students on the roster", after_update);

    Ok(DemoReport {
        after_register,
        after_remove,
        after_update,
    })
}

/// Blank line, title, then its underline.
///
/// Underlines are passed verbatim; they do not all match the title width.
fn heading(out: &mut dyn Write, title: &str, underline: &str) -> RosterResult<()> {
    writeln!(out, "\n{}", title)?;
    writeln!(out, "{}", underline)?;
    Ok(())
}
