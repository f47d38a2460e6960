//! Discover feed: vertical pager of venues, each with a media carousel

use super::carousel::{carousel_controls, paint_media, step_index};
use super::App;
use crate::gestures::{DragTracker, GestureAction, MediaGesture, PlayerControls, Swipe, WheelPager};
use crate::router::Route;
use crate::theme;
use crate::types::{MediaItem, MediaKind, Venue};
use crate::ui::components::icon_button;
use eframe::egui;
use egui_phosphor::regular as icons;
use tracing::{debug, info};

/// Per-venue page state
#[derive(Debug, Clone)]
pub struct VenuePage {
    pub carousel: usize,
    pub favorite: bool,
    pub player: PlayerControls,
    pub gesture: MediaGesture,
}

/// What a frame of pointer input on the media surface did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaInput {
    Player(GestureAction),
    Swiped(Swipe),
}

#[derive(Debug, Clone)]
pub struct FeedState {
    page: usize,
    pages: Vec<VenuePage>,
    drag: DragTracker,
    wheel: WheelPager,
    carousel_wheel: WheelPager,
}

impl FeedState {
    pub fn new(venue_count: usize, muted: bool) -> Self {
        let pages = (0..venue_count)
            .map(|_| VenuePage {
                carousel: 0,
                favorite: false,
                player: PlayerControls::new(muted),
                gesture: MediaGesture::default(),
            })
            .collect();
        Self {
            page: 0,
            pages,
            drag: DragTracker::default(),
            wheel: WheelPager::default(),
            carousel_wheel: WheelPager::default(),
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn current(&self) -> Option<&VenuePage> {
        self.pages.get(self.page)
    }

    pub fn current_mut(&mut self) -> Option<&mut VenuePage> {
        self.pages.get_mut(self.page)
    }

    /// Moves the pager by `delta` pages, clamped to the feed. A hold in
    /// progress on the page being left is cancelled.
    pub fn scroll(&mut self, delta: isize) -> bool {
        let Some(target) = step_index(self.page, delta, self.pages.len()) else {
            return false;
        };
        self.cancel_gesture();
        self.page = target;
        true
    }

    /// Steps the current page's carousel, clamped to `media_len` items.
    pub fn step_carousel(&mut self, delta: isize, media_len: usize) -> bool {
        let Some(current) = self.current().map(|p| p.carousel) else {
            return false;
        };
        let Some(target) = step_index(current, delta, media_len) else {
            return false;
        };
        self.cancel_gesture();
        if let Some(page) = self.current_mut() {
            page.carousel = target;
        }
        true
    }

    /// Left/right swipes step the carousel, up/down swipes step the pager.
    pub fn apply_swipe(&mut self, swipe: Swipe, media_len: usize) -> bool {
        match swipe {
            Swipe::Left => self.step_carousel(1, media_len),
            Swipe::Right => self.step_carousel(-1, media_len),
            Swipe::Up => self.scroll(1),
            Swipe::Down => self.scroll(-1),
        }
    }

    pub fn cancel_gesture(&mut self) {
        if let Some(page) = self.current_mut() {
            if let Some(action) = page.gesture.cancel() {
                page.player.apply(action);
            }
        }
    }

    /// Player of the current page, only while its carousel shows a video.
    pub fn playback(&self, media: &[MediaItem]) -> Option<PlayerControls> {
        let page = self.current()?;
        let item = media.get(page.carousel)?;
        (item.kind == MediaKind::Video).then_some(page.player)
    }

    /// Feeds one frame of pointer state on the media surface. A press that
    /// stays put is a tap or hold on the player (videos only); one that
    /// travels is a swipe and never reaches the player.
    pub fn on_media_pointer(
        &mut self,
        down: bool,
        pos: Option<egui::Pos2>,
        now: f64,
        media: &[MediaItem],
    ) -> Option<MediaInput> {
        if down {
            if let Some(pos) = pos {
                self.drag.track(pos);
            }
            if self.drag.is_swipe() {
                self.cancel_gesture();
                return None;
            }
            if self.playback(media).is_none() {
                return None;
            }
            let page = self.current_mut()?;
            page.gesture.press(now);
            let action = page.gesture.update(now)?;
            page.player.apply(action);
            return Some(MediaInput::Player(action));
        }

        let offset = self.drag.finish()?;
        if let Some(swipe) = Swipe::from_offset(offset) {
            self.cancel_gesture();
            self.apply_swipe(swipe, media.len());
            return Some(MediaInput::Swiped(swipe));
        }
        let page = self.current_mut()?;
        let action = page.gesture.release(now)?;
        page.player.apply(action);
        Some(MediaInput::Player(action))
    }
}

impl App {
    pub(crate) fn render_feed(&mut self, ui: &mut egui::Ui) -> Option<Route> {
        let mut next = None;
        let now = ui.input(|i| i.time);
        let full = ui.available_rect_before_wrap();

        if self.venues.is_empty() {
            ui.centered_and_justified(|ui| {
                ui.label(egui::RichText::new("No venues nearby").color(theme::TEXT_MUTED));
            });
            return None;
        }

        // Wheel/trackpad: vertical flips venues, horizontal flips media
        let (wheel, up, down) = ui.input(|i| {
            (
                i.raw_scroll_delta,
                i.key_pressed(egui::Key::ArrowUp) || i.key_pressed(egui::Key::PageUp),
                i.key_pressed(egui::Key::ArrowDown) || i.key_pressed(egui::Key::PageDown),
            )
        });
        let hovered = ui.rect_contains_pointer(full);
        let wheel_step = if hovered {
            self.feed.wheel.feed(wheel.y, now)
        } else {
            None
        };
        if down || wheel_step == Some(1) {
            self.scroll_feed(1);
        } else if up || wheel_step == Some(-1) {
            self.scroll_feed(-1);
        }
        let venue = self.venues.get(self.feed.page())?.clone();
        if hovered {
            if let Some(step) = self.feed.carousel_wheel.feed(wheel.x, now) {
                self.feed.step_carousel(step, venue.media.len());
            }
        }

        let media_rect = full;
        let media_response = ui.allocate_rect(media_rect, egui::Sense::click_and_drag());

        // Tap toggles mute, hold pauses until released, drags swipe
        let pressed = media_response.is_pointer_button_down_on();
        let pointer = ui.input(|i| i.pointer.latest_pos());
        if let Some(input) = self.feed.on_media_pointer(pressed, pointer, now, &venue.media) {
            debug!(venue = venue.id, ?input, page = self.feed.page(), "Media input");
        }
        if pressed {
            ui.ctx()
                .request_repaint_after(std::time::Duration::from_millis(100));
        }

        // A swipe may have changed the page
        let venue = self.venues.get(self.feed.page())?.clone();
        let media_len = venue.media.len();
        let carousel = self.feed.current().map_or(0, |p| p.carousel);
        if let Some(item) = venue.media.get(carousel) {
            paint_media(ui.painter(), media_rect, item);
        }
        let playback = self.feed.playback(&venue.media);

        let page = self.feed.current().cloned();

        // Status badges, top-left
        let status_rect = egui::Rect::from_min_size(
            media_rect.min + egui::vec2(theme::SPACING_XL, theme::SPACING_XL),
            egui::vec2(120.0, 40.0),
        );
        if let Some(player) = playback {
            let painter = ui.painter();
            let mut x = status_rect.left();
            let badges = [
                (player.muted, icons::SPEAKER_SLASH),
                (!player.playing, icons::PAUSE),
            ];
            for (shown, icon) in badges {
                if shown {
                    painter.text(
                        egui::pos2(x, status_rect.top()),
                        egui::Align2::LEFT_TOP,
                        icon,
                        egui::FontId::proportional(theme::FONT_ICON),
                        theme::TEXT_PRIMARY,
                    );
                    x += theme::FONT_ICON + theme::SPACING_MD;
                }
            }
        }

        // Action column, right edge
        let column_rect = egui::Rect::from_min_max(
            egui::pos2(media_rect.right() - 64.0, media_rect.top() + theme::SPACING_XL),
            egui::pos2(media_rect.right() - theme::SPACING_SM, media_rect.bottom()),
        );
        ui.scope_builder(egui::UiBuilder::new().max_rect(column_rect), |ui| {
            ui.vertical_centered(|ui| {
                if icon_button(ui, icons::FUNNEL, theme::TEXT_PRIMARY)
                    .on_hover_text("Filters")
                    .clicked()
                {
                    next = Some(Route::FilterActivities);
                }
                ui.add_space(theme::SPACING_LG);

                let favorite = page.as_ref().is_some_and(|p| p.favorite);
                let color = if favorite {
                    theme::BTN_DANGER
                } else {
                    theme::TEXT_PRIMARY
                };
                if icon_button(ui, icons::HEART, color).on_hover_text("Favorite").clicked() {
                    if let Some(page) = self.feed.current_mut() {
                        page.favorite = !page.favorite;
                        info!(venue = venue.id, favorite = page.favorite, "Favorite toggled");
                    }
                }
                ui.add_space(theme::SPACING_LG);

                if icon_button(ui, icons::SHARE_NETWORK, theme::TEXT_PRIMARY)
                    .on_hover_text("Copy venue to clipboard")
                    .clicked()
                {
                    ui.ctx().copy_text(share_text(&venue));
                    info!(venue = venue.id, "Venue shared");
                }
                ui.add_space(theme::SPACING_LG);

                if icon_button(ui, icons::CARET_UP, theme::TEXT_PRIMARY).clicked() {
                    self.scroll_feed(-1);
                }
                ui.add_space(theme::SPACING_SM);
                if icon_button(ui, icons::CARET_DOWN, theme::TEXT_PRIMARY).clicked() {
                    self.scroll_feed(1);
                }
            });
        });

        // Carousel controls, just above the info panel
        let info_height = 96.0;
        let carousel_rect = egui::Rect::from_min_max(
            egui::pos2(media_rect.left(), media_rect.bottom() - info_height - 44.0),
            egui::pos2(media_rect.right(), media_rect.bottom() - info_height),
        );
        if media_len > 1 {
            ui.scope_builder(egui::UiBuilder::new().max_rect(carousel_rect), |ui| {
                if let Some(step) = carousel_controls(ui, carousel, media_len) {
                    self.feed.step_carousel(step, media_len);
                }
            });
        }

        // Info panel, bottom
        let info_rect = egui::Rect::from_min_max(
            egui::pos2(media_rect.left(), media_rect.bottom() - info_height),
            media_rect.max,
        );
        let info_response = ui
            .scope_builder(egui::UiBuilder::new().max_rect(info_rect), |ui| {
                egui::Frame::new()
                    .fill(theme::BG_OVERLAY)
                    .inner_margin(egui::Margin::same(theme::SPACING_XL as i8))
                    .show(ui, |ui| {
                        ui.set_min_size(ui.available_size());
                        ui.add(
                            egui::Label::new(
                                egui::RichText::new(venue.name)
                                    .size(theme::FONT_HEADING)
                                    .strong()
                                    .color(theme::TEXT_PRIMARY),
                            )
                            .selectable(false),
                        );
                        ui.horizontal(|ui| {
                            ui.label(
                                egui::RichText::new(format!("{} {}", icons::MAP_PIN, venue.distance))
                                    .color(theme::TEXT_SECONDARY),
                            );
                            ui.label(egui::RichText::new(venue.cost_indicator).color(theme::TEXT_COST));
                        });
                    })
                    .response
            })
            .inner
            .interact(egui::Sense::click());
        if info_response
            .on_hover_cursor(egui::CursorIcon::PointingHand)
            .clicked()
        {
            next = Some(Route::VenueDetails(venue.id));
        }

        next
    }

    fn scroll_feed(&mut self, delta: isize) {
        if self.feed.scroll(delta) {
            debug!(page = self.feed.page(), "Feed page changed");
        }
    }
}

fn share_text(venue: &Venue) -> String {
    format!("{} ({}), {}", venue.name, venue.distance, venue.address)
}
