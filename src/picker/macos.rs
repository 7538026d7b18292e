//! macOS implementation of the color dialog
//!
//! AppKit has no modal color dialog with OK/Cancel, so the picker is an
//! `NSAlert` whose accessory view is an `NSColorWell`. Activating the well
//! opens the shared `NSColorPanel`, which keeps working while the alert runs
//! modally. The alert's first button confirms, the second one cancels.

// activateIgnoringOtherApps is deprecated since macOS 14 but still needed on older systems
#![allow(deprecated)]
// Some objc2 methods are unsafe depending on the SDK headers
#![allow(unused_unsafe)]

// =============================================================================
// IMPORTS
// =============================================================================

use objc2::rc::Retained;
use objc2::MainThreadOnly;
use objc2_app_kit::{
    NSAlert, NSApplication, NSApplicationActivationPolicy, NSColor, NSColorPanel, NSColorSpace,
    NSColorWell, NSModalResponse, NSView,
};
use objc2_foundation::{MainThreadMarker, NSPoint, NSRect, NSSize, NSString};

use super::{unit_to_byte, PickRequest};
use crate::common::Color;
use crate::config::{COLOR_WELL_HEIGHT, COLOR_WELL_WIDTH};
use crate::error::PickerError;

/// Réponse du premier bouton (OK) / Response of the first button (OK)
const FIRST_BUTTON_RETURN: NSModalResponse = 1000;

// =============================================================================
// CONVERSIONS NSColor
// NSColor CONVERSIONS
// =============================================================================

fn to_ns_color(color: Color) -> Retained<NSColor> {
    let unit = |v: u8| f64::from(v) / 255.0;
    unsafe {
        NSColor::colorWithSRGBRed_green_blue_alpha(
            unit(color.r),
            unit(color.g),
            unit(color.b),
            unit(color.a),
        )
    }
}

/// Lit les composantes sRGB d'une NSColor
/// Reads the sRGB components of an NSColor
fn from_ns_color(color: &NSColor) -> Result<Color, PickerError> {
    let srgb = unsafe { color.colorUsingColorSpace(&NSColorSpace::sRGBColorSpace()) }
        .ok_or_else(|| {
            PickerError::UnexpectedOutput("selected color has no sRGB representation".to_string())
        })?;

    unsafe {
        Ok(Color::rgba(
            unit_to_byte(srgb.redComponent()),
            unit_to_byte(srgb.greenComponent()),
            unit_to_byte(srgb.blueComponent()),
            unit_to_byte(srgb.alphaComponent()),
        ))
    }
}

// =============================================================================
// API PUBLIQUE
// PUBLIC API
// =============================================================================

/// Affiche l'alerte avec le puits de couleur et attend la réponse
/// Shows the alert with the color well and waits for the answer
pub fn pick(request: &PickRequest) -> Result<Option<Color>, PickerError> {
    // AppKit n'accepte l'interface que depuis le thread principal
    // AppKit only accepts UI calls from the main thread
    let mtm = MainThreadMarker::new().ok_or_else(|| {
        PickerError::Unavailable("the color panel must be opened from the main thread".to_string())
    })?;

    let app = NSApplication::sharedApplication(mtm);
    unsafe {
        // Pas d'icône dans le Dock / No Dock icon
        app.setActivationPolicy(NSApplicationActivationPolicy::Accessory);
        app.activateIgnoringOtherApps(true);
    }

    let panel = unsafe { NSColorPanel::sharedColorPanel(mtm) };
    unsafe { panel.setShowsAlpha(request.alpha) };

    let frame = NSRect::new(
        NSPoint::new(0.0, 0.0),
        NSSize::new(COLOR_WELL_WIDTH, COLOR_WELL_HEIGHT),
    );
    let well = unsafe { NSColorWell::initWithFrame(NSColorWell::alloc(mtm), frame) };
    unsafe { well.setColor(&to_ns_color(request.seed)) };
    let well_view: &NSView = &well;

    let alert = unsafe { NSAlert::new(mtm) };
    let response = unsafe {
        alert.setMessageText(&NSString::from_str(&request.title));
        alert.addButtonWithTitle(&NSString::from_str("OK"));
        alert.addButtonWithTitle(&NSString::from_str("Cancel"));
        alert.setAccessoryView(Some(well_view));
        alert.layout();

        // Ouvre le panneau directement / Opens the panel right away
        well.activate(true);
        let response = alert.runModal();
        well.deactivate();
        panel.orderOut(None);
        response
    };

    if response != FIRST_BUTTON_RETURN {
        return Ok(None);
    }

    let chosen = unsafe { well.color() };
    let color = from_ns_color(&chosen)?;
    Ok(Some(if request.alpha {
        color
    } else {
        color.with_alpha(request.seed.a)
    }))
}
