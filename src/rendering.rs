use std::io::{self, Write};
use log::info;
use crossterm::{
    cursor::MoveTo,
    execute,
};
use vector2d::Vector2D;

// --- ScreenBuffer: in-memory terminal used by headless runs ---
pub struct ScreenBuffer {
    buffer: Vec<Vec<char>>,
    width: u16,
    height: u16,
    cursor_x: u16,
    cursor_y: u16,
}

impl ScreenBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        ScreenBuffer {
            buffer: vec![vec![' '; width as usize]; height as usize],
            width,
            height,
            cursor_x: 0,
            cursor_y: 0,
        }
    }

    pub fn move_to(&mut self, x: u16, y: u16) {
        self.cursor_x = x;
        self.cursor_y = y;
    }

    pub fn write_str(&mut self, s: &str) {
        for c in s.chars() {
            self.set_char(self.cursor_x, self.cursor_y, c);
            self.cursor_x = self.cursor_x.saturating_add(1);
        }
    }

    pub fn set_char(&mut self, x: u16, y: u16, c: char) {
        if y < self.height && x < self.width {
            self.buffer[y as usize][x as usize] = c;
        }
    }

    pub fn row(&self, y: u16) -> String {
        self.buffer
            .get(y as usize)
            .map(|row| row.iter().collect())
            .unwrap_or_default()
    }

    pub fn print_to_log(&self) {
        info!("--- Screen Buffer ---");
        for y in 0..self.height {
            info!("{}", self.row(y));
        }
        info!("---------------------");
    }
}

impl Write for ScreenBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.write_str(&String::from_utf8_lossy(buf));
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

// --- OutputTarget: the real terminal or a ScreenBuffer ---
pub enum OutputTarget {
    Stdout(io::Stdout),
    ScreenBuffer(ScreenBuffer),
}

impl OutputTarget {
    pub fn execute_move_to(&mut self, command: MoveTo) -> io::Result<()> {
        match self {
            OutputTarget::Stdout(s) => execute!(s, command),
            OutputTarget::ScreenBuffer(sb) => {
                sb.move_to(command.0, command.1);
                Ok(())
            }
        }
    }

    pub fn execute_other_command(&mut self, command: impl crossterm::Command) -> io::Result<()> {
        match self {
            OutputTarget::Stdout(s) => execute!(s, command),
            OutputTarget::ScreenBuffer(_) => Ok(()), // No terminal state to change
        }
    }

    pub fn is_headless(&self) -> bool {
        matches!(self, OutputTarget::ScreenBuffer(_))
    }
}

impl Write for OutputTarget {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            OutputTarget::Stdout(s) => s.write(buf),
            OutputTarget::ScreenBuffer(sb) => sb.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            OutputTarget::Stdout(s) => s.flush(),
            OutputTarget::ScreenBuffer(sb) => sb.flush(),
        }
    }
}

// --- FieldGrid: the wrapping field entities draw into ---
pub struct FieldGrid {
    grid: Vec<Vec<char>>,
    pub width: u16,
    pub height: u16,
}

impl FieldGrid {
    pub fn new(width: u16, height: u16) -> Self {
        FieldGrid {
            grid: vec![vec![' '; width as usize]; height as usize],
            width,
            height,
        }
    }

    /// Grid cell for a field position, clamped to the last row and column.
    pub fn cell_for(&self, position: Vector2D) -> (u16, u16) {
        let max_x = self.width.saturating_sub(1) as f64;
        let max_y = self.height.saturating_sub(1) as f64;
        let cell = position.contain(max_x, max_y);
        (cell.x.floor() as u16, cell.y.floor() as u16)
    }

    pub fn set_char(&mut self, x: u16, y: u16, c: char) {
        if y < self.height && x < self.width {
            self.grid[y as usize][x as usize] = c;
        }
    }

    pub fn clear(&mut self) {
        for row in &mut self.grid {
            row.fill(' ');
        }
    }

    pub fn render(&self, out: &mut OutputTarget) -> io::Result<()> {
        for (y, row) in self.grid.iter().enumerate() {
            out.execute_move_to(MoveTo(0, y as u16))?;
            write!(out, "{}", row.iter().collect::<String>())?;
        }
        Ok(())
    }

    pub fn clear_screen_manual(&self, out: &mut OutputTarget) -> io::Result<()> {
        for y in 0..self.height {
            out.execute_move_to(MoveTo(0, y))?;
            write!(out, "{}", " ".repeat(self.width as usize))?;
        }
        out.execute_move_to(MoveTo(0, 0))?;
        Ok(())
    }
}
