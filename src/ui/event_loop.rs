use std::sync::Mutex;

use global_hotkey::{GlobalHotKeyEvent, HotKeyState};
use log::{error, info, warn};
use tao::event::Event;
use tao::event_loop::{ControlFlow, EventLoopBuilder};

use crate::managers::hotkey_dispatcher::HotkeyDispatcher;
use crate::services::global_hotkeys::{GlobalHotkeyRegistrar, HotkeyRegistrar};

#[derive(Debug)]
enum UserEvent {
    /// A favorite combination was pressed; carries the OS hotkey id.
    HotkeyPressed(u32),
}

/// Registers the favorite hotkeys and runs the event loop forever.
pub fn run(mut dispatcher: HotkeyDispatcher) {
    let event_loop = EventLoopBuilder::<UserEvent>::with_user_event().build();

    // The manager has to live on the event loop thread.
    let mut registrar = match GlobalHotkeyRegistrar::new() {
        Ok(r) => r,
        Err(e) => {
            error!("Global hotkeys unavailable: {}", e);
            return;
        }
    };
    if let Err(e) = dispatcher.register(&mut registrar as &mut dyn HotkeyRegistrar) {
        error!("No favorite hotkeys could be registered: {}", e);
        return;
    }

    let proxy = Mutex::new(event_loop.create_proxy());
    GlobalHotKeyEvent::set_event_handler(Some(move |event: GlobalHotKeyEvent| {
        if event.state != HotKeyState::Pressed {
            return;
        }
        if let Ok(proxy) = proxy.lock() {
            if proxy.send_event(UserEvent::HotkeyPressed(event.id)).is_err() {
                warn!("Event loop closed, dropping hotkey {}", event.id);
            }
        }
    }));

    info!("Listening for favorite hotkeys");
    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;

        match event {
            Event::UserEvent(UserEvent::HotkeyPressed(id)) => {
                dispatcher.handle_event(id);
            }
            Event::LoopDestroyed => {
                dispatcher.unregister(&mut registrar);
                info!("Favorite hotkeys released");
            }
            _ => {}
        }
    });
}
