use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{UnitKind, UnitRequest};
use crate::render;
use crate::store::UnitStore;

/// Generate the service unit and, when a timer spec is present, its timer.
///
/// The flow is a three-state machine: after the service write, a run either
/// ends (no timer requested), ends with a reported skip (service file absent),
/// or ends after the timer write. The skip branch is a reported condition,
/// not a process failure.
pub fn run<S: UnitStore>(store: &mut S, request: &UnitRequest) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    let service = render::service_body(request);
    let service_path = store.write(&request.name, UnitKind::Service, &service)?;
    result.add_message(CmdMessage::success(format!(
        "Service file saved to {}",
        service_path.display()
    )));
    result.add_written(service_path);

    let Some(timer_spec) = &request.timer_spec else {
        return Ok(result);
    };

    // A timer must never point at a service unit that is not actually in the
    // store, even if the write above claimed success.
    if !store.exists(&request.name, UnitKind::Service) {
        result.add_message(CmdMessage::error(format!(
            "Error: Service file {} does not exist. Please create the service first.",
            UnitKind::Service.file_name(&request.name)
        )));
        return Ok(result);
    }

    let timer = render::timer_body(&request.name, timer_spec);
    let timer_path = store.write(&request.name, UnitKind::Timer, &timer)?;
    result.add_message(CmdMessage::success(format!(
        "Timer file saved to {}",
        timer_path.display()
    )));
    result.add_written(timer_path);

    Ok(result)
}
