// src/templates.rs
use maud::{html, Markup, DOCTYPE};

const ENDPOINTS: &[(&str, &str)] = &[
    ("/api/complaints", "Resident complaints and their status"),
    ("/api/visitors", "Gate visitor log"),
    ("/api/notices", "Society notice board"),
    ("/api/maintenance", "Maintenance payments"),
    ("/api/sos", "SOS alerts"),
    ("/api/residents", "Resident directory"),
    ("/api/dashboard", "Aggregate counts and recent activity"),
];

/// Landing page served at `/`, mostly useful as a liveness check.
pub fn home_page() -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { "Zeecurity" }
            }
            body {
                h1 { "Zeecurity Backend Running Successfully!" }
                ul {
                    @for (path, about) in ENDPOINTS {
                        li { code { (path) } " - " (about) }
                    }
                }
            }
        }
    }
}
