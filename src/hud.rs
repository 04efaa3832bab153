use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::ttf::Font;
use sdl2::video::Window;

pub const GAME_OVER_TEXT: &str = "GAME OVER!";
/// Space added around the game-over text to size its box.
pub const BOX_MARGIN: u32 = 50;
pub const BOX_THICKNESS: u32 = 5;

pub fn centered(screen_width: u32, screen_height: u32, width: u32, height: u32) -> Rect {
    let x = (screen_width as i32 - width as i32) / 2;
    let y = (screen_height as i32 - height as i32) / 2;
    Rect::new(x, y, width, height)
}

/// Returns the text rectangle and its surrounding box, both centred on screen.
pub fn game_over_layout(
    screen_width: u32,
    screen_height: u32,
    text_width: u32,
    text_height: u32,
) -> (Rect, Rect) {
    let text = centered(screen_width, screen_height, text_width, text_height);
    let frame = centered(
        screen_width,
        screen_height,
        text_width + BOX_MARGIN,
        text_height + BOX_MARGIN,
    );
    (text, frame)
}

/// Splits a box outline into four filled strips of the given thickness.
pub fn outline(frame: Rect, thickness: u32) -> [Rect; 4] {
    let thickness = thickness.min(frame.width() / 2).min(frame.height() / 2).max(1);
    let inner_height = frame.height().saturating_sub(2 * thickness).max(1);
    [
        Rect::new(frame.x(), frame.y(), frame.width(), thickness),
        Rect::new(frame.x(), frame.bottom() - thickness as i32, frame.width(), thickness),
        Rect::new(frame.x(), frame.y() + thickness as i32, thickness, inner_height),
        Rect::new(
            frame.right() - thickness as i32,
            frame.y() + thickness as i32,
            thickness,
            inner_height,
        ),
    ]
}

fn draw_text(
    canvas: &mut Canvas<Window>,
    font: &Font,
    text: &str,
    color: Color,
    place: impl Fn(u32, u32) -> Rect,
) -> Result<Rect, String> {
    let text_surface = font.render(text).blended(color).map_err(|e| e.to_string())?;
    let texture_creator = canvas.texture_creator();
    let text_texture = texture_creator
        .create_texture_from_surface(&text_surface)
        .map_err(|e| e.to_string())?;
    let texture_query = text_texture.query();
    let target_rect = place(texture_query.width, texture_query.height);
    canvas.copy(&text_texture, None, Some(target_rect))?;
    Ok(target_rect)
}

pub fn draw_score(
    canvas: &mut Canvas<Window>,
    font: &Font,
    score: u32,
    color: Color,
    left: i32,
    strip_height: u32,
) -> Result<(), String> {
    let text = format!("Score: {score}");
    draw_text(canvas, font, &text, color, |width, height| {
        let y = (strip_height as i32 - height as i32) / 2;
        Rect::new(left, y.max(0), width, height)
    })?;
    Ok(())
}

pub fn draw_game_over(
    canvas: &mut Canvas<Window>,
    font: &Font,
    text_color: Color,
    box_color: Color,
) -> Result<(), String> {
    let (screen_width, screen_height) = canvas.output_size()?;
    let text_rect = draw_text(canvas, font, GAME_OVER_TEXT, text_color, |width, height| {
        centered(screen_width, screen_height, width, height)
    })?;
    let (_, frame) = game_over_layout(
        screen_width,
        screen_height,
        text_rect.width(),
        text_rect.height(),
    );
    canvas.set_draw_color(box_color);
    canvas.fill_rects(&outline(frame, BOX_THICKNESS))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn game_over_box_is_centred_around_text() {
        let (text, frame) = game_over_layout(500, 250, 120, 20);
        assert_eq!(text, Rect::new(190, 115, 120, 20));
        assert_eq!(frame, Rect::new(165, 90, 170, 70));
        assert_eq!(text.center(), frame.center());
    }

    #[test]
    fn outline_strips_stay_inside_box() {
        let frame = Rect::new(165, 90, 170, 70);
        let strips = outline(frame, BOX_THICKNESS);
        for strip in strips {
            let inside = strip.left() >= frame.left()
                && strip.right() <= frame.right()
                && strip.top() >= frame.top()
                && strip.bottom() <= frame.bottom();
            assert!(inside, "{strip:?} escapes {frame:?}");
        }
        assert_eq!(strips[0], Rect::new(165, 90, 170, 5));
        assert_eq!(strips[1], Rect::new(165, 155, 170, 5));
        assert_eq!(strips[2], Rect::new(165, 95, 5, 60));
        assert_eq!(strips[3], Rect::new(330, 95, 5, 60));
    }

    #[test]
    fn centred_rect_may_start_off_screen_when_too_large() {
        let rect = centered(100, 100, 140, 20);
        assert_eq!(rect.x(), -20);
        assert_eq!(rect.y(), 40);
    }
}
