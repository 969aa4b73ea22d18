//! Unit-file rendering.
//!
//! Pure string construction, no I/O. Section and key order is fixed; field
//! values are interpolated verbatim. Values containing newlines or `=` are
//! passed through untouched, with no escaping, quoting, or line-wrapping.

use crate::model::UnitRequest;

/// Render the `.service` unit body.
pub fn service_body(request: &UnitRequest) -> String {
    format!(
        "[Unit]
Description={description}
After=network.target

[Service]
Type=simple
User={user}
WorkingDirectory={working_dir}
ExecStart={command}
Restart=on-failure

[Install]
WantedBy=default.target
",
        description = request.description,
        user = request.user,
        working_dir = request.working_dir.display(),
        command = request.command,
    )
}

/// Render the `.timer` unit body that triggers `<name>.service`.
pub fn timer_body(name: &str, timer_spec: &str) -> String {
    format!(
        "[Unit]
Description=Timer for {name} service

[Timer]
OnCalendar={timer_spec}
Persistent=true

[Install]
WantedBy=timers.target
"
    )
}
