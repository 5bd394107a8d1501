//! Role-based navigation, computed per call.
//!
//! The original sidebar rebuilt a navigation table from mutable module
//! state. Redesigned here as a pure function: same profile in, same entries
//! out, nothing shared.

use crate::domain::{Capability, UserProfile, resolve_capabilities};

/// One sidebar entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavEntry {
    pub title: &'static str,
    pub path: &'static str,
}

const fn entry(title: &'static str, path: &'static str) -> NavEntry {
    NavEntry { title, path }
}

/// Main navigation for a profile. Dashboard first, Profile last; the middle
/// depends on what the user is allowed to see.
pub fn navigation_for(user: &UserProfile) -> Vec<NavEntry> {
    let caps = resolve_capabilities(user);

    let mut nav = vec![entry("Dashboard", "/dashboard")];

    if caps.contains(Capability::ViewAdminPanels) {
        nav.extend([
            entry("Employee Management", "/employees"),
            entry("Task Management", "/tasks"),
            entry("Project Management", "/projects"),
        ]);
        // Admins manage attendance; project managers only upload it.
        if caps.contains(Capability::UploadAttendance) {
            nav.push(entry("Attendance Upload", "/attendance/upload"));
        } else {
            nav.push(entry("Attendance Management", "/attendance"));
        }
        nav.extend([
            entry("Performance", "/performance"),
            entry("Announcements", "/announcements"),
            entry("Reports", "/reports"),
        ]);
    } else if caps.contains(Capability::ViewSalesBoard) {
        nav.extend([
            entry("Sales Calls", "/sales/calls"),
            entry("Leads", "/sales/leads"),
            entry("Sales Reports", "/sales/reports"),
        ]);
    } else {
        nav.extend([
            entry("My Tasks", "/tasks"),
            entry("Attendance", "/attendance"),
            entry("Time Tracking", "/time-tracking"),
        ]);
    }

    nav.push(entry("Profile", "/profile"));
    nav
}

/// Secondary navigation, identical for everyone.
pub fn secondary_navigation() -> Vec<NavEntry> {
    vec![
        entry("Settings", "/settings"),
        entry("Help", "/help"),
        entry("Search", "/search"),
    ]
}
