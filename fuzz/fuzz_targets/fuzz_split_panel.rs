#![no_main]

use libfuzzer_sys::fuzz_target;
use panekit_core::event::{MouseButton, MouseEvent, MouseEventKind};
use panekit_layout::{
    PanelSlot, PanelTarget, PanelVisibility, Rect, SplitAxis, SplitPanel, SplitPanelConfig,
};

const TARGETS: [PanelTarget; 3] = [PanelTarget::First, PanelTarget::Second, PanelTarget::Both];

fuzz_target!(|data: &[u8]| {
    // First two bytes pick the axis, fixed side, gutter and snap threshold.
    if data.len() < 2 {
        return;
    }
    let axis = if data[0] & 1 == 0 {
        SplitAxis::Horizontal
    } else {
        SplitAxis::Vertical
    };
    let fixed = if data[0] & 2 == 0 {
        PanelSlot::First
    } else {
        PanelSlot::Second
    };
    let config = SplitPanelConfig::default()
        .fixed_panel(fixed)
        .gutter_extent(u16::from(data[1] % 32) + 1)
        .snap_threshold(u16::from(data[1] / 4));
    let Ok(mut panel) = SplitPanel::<u8>::new(axis, config) else {
        return;
    };

    // Remaining input is consumed in (opcode, a, b) triples.
    for chunk in data[2..].chunks_exact(3) {
        let (op, a, b) = (chunk[0], chunk[1], chunk[2]);
        let x = u16::from(a) * 8;
        let y = u16::from(b) * 8;
        match op % 9 {
            0 => {
                panel.open_panel(TARGETS[usize::from(a % 3)]);
            }
            1 => {
                panel.close_panel(TARGETS[usize::from(a % 3)]);
            }
            2 => {
                panel.set_panel_content(TARGETS[usize::from(a % 3)], b);
            }
            3 => {
                let slot = if a & 1 == 0 {
                    PanelSlot::First
                } else {
                    PanelSlot::Second
                };
                panel.toggle_panel(slot, Some(b));
            }
            4 => {
                panel.observe_container(Rect::new(u16::from(op), 0, x, y));
            }
            5 => {
                panel.handle_mouse(&MouseEvent::new(
                    MouseEventKind::Down(MouseButton::Left),
                    x,
                    y,
                ));
            }
            6 => {
                panel.handle_mouse(&MouseEvent::new(
                    MouseEventKind::Drag(MouseButton::Left),
                    x,
                    y,
                ));
            }
            7 => {
                panel.handle_mouse(&MouseEvent::new(MouseEventKind::Up(MouseButton::Left), x, y));
            }
            _ => {
                panel.drag_resize(x);
            }
        }

        // Post-conditions that must always hold:
        let extent = panel.geometry().container_extent();
        assert_eq!(panel.sizes().total(), u32::from(extent), "sum invariant");
        if panel.current_visibility() != PanelVisibility::Both {
            assert!(panel.layout().divider.is_none(), "divider without both");
            assert!(!panel.is_dragging(), "drag without divider");
        }
    }
});
