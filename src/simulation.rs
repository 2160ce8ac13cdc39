use std::io::{self, Write};
use std::time::Duration;
use crossterm::{
    cursor::MoveTo,
    event::{self, Event, KeyCode},
};
use log::{error, info};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::SimConfig;
use crate::constants::*;
use crate::entities::{Drifter, Seeker};
use crate::rendering::{FieldGrid, OutputTarget};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub frames: u64,
    pub catches: u32,
}

pub struct Simulation {
    pub width: u16,
    pub height: u16,
    pub out: OutputTarget,
    max_frames: Option<u64>,
    drifter_count: usize,
    rng: StdRng,
}

impl Simulation {
    pub fn new(config: &SimConfig, width: u16, height: u16, out: OutputTarget) -> Self {
        let rng = match config.seed {
            Some(seed) => {
                info!("Seeding random source with {}", seed);
                StdRng::seed_from_u64(seed)
            }
            None => StdRng::from_entropy(),
        };
        Simulation {
            width,
            height,
            out,
            max_frames: config.max_frames,
            drifter_count: config.drifter_count,
            rng,
        }
    }

    pub fn run(&mut self) -> io::Result<RunSummary> {
        let (field_w, field_h) = self.field_size();
        let mut drifters: Vec<Drifter> = (0..self.drifter_count)
            .map(|_| Drifter::spawn(&mut self.rng, field_w, field_h))
            .collect();
        let mut seeker = Seeker::new(field_w / 2.0, field_h / 2.0);
        let mut grid = FieldGrid::new(self.width, self.height);

        let mut running = true;
        let mut frame_count = 0;
        let mut catches = 0;

        while running && self.max_frames.is_none_or(|max| frame_count < max) {
            grid.clear();
            self.handle_input(&mut running)?;

            let (field_w, field_h) = self.field_size();
            if grid.width != self.width || grid.height != self.height {
                grid = FieldGrid::new(self.width, self.height);
            }

            for drifter in &mut drifters {
                drifter.update(&mut self.rng, field_w, field_h);
            }

            if let Some((index, offset)) = seeker.nearest(&drifters, field_w, field_h) {
                if offset.magnitude() < CATCH_RADIUS {
                    catches += 1;
                    info!("Frame {}: caught drifter {} at {}", frame_count, index, drifters[index].position);
                    drifters[index] = Drifter::spawn(&mut self.rng, field_w, field_h);
                } else {
                    seeker.steer_towards(offset);
                }
            }
            seeker.update(field_w, field_h);

            for drifter in &drifters {
                drifter.draw(&mut grid);
            }
            seeker.draw(&mut grid);

            self.render(&grid, frame_count, catches)?;
            frame_count += 1;
        }

        info!("Simulation ended after {} frames with {} catches.", frame_count, catches);
        Ok(RunSummary { frames: frame_count, catches })
    }

    fn field_size(&self) -> (f64, f64) {
        (self.width.max(1) as f64, self.height.max(1) as f64)
    }

    fn handle_input(&mut self, running: &mut bool) -> io::Result<()> {
        if self.out.is_headless() {
            return Ok(());
        }

        let frame = Duration::from_millis(FRAME_DURATION_MS);
        if event::poll(frame).map_err(|e| { error!("Failed to poll event: {}", e); e })? {
            match event::read().map_err(|e| { error!("Failed to read event: {}", e); e })? {
                Event::Key(key_event) => match key_event.code {
                    KeyCode::Char('q') | KeyCode::Esc => *running = false,
                    _ => {}
                },
                Event::Resize(new_width, new_height) => {
                    info!("Field resized to {}x{}", new_width, new_height);
                    self.width = new_width;
                    self.height = new_height;
                }
                _ => {}
            }
        }
        Ok(())
    }

    fn render(&mut self, grid: &FieldGrid, frame_count: u64, catches: u32) -> io::Result<()> {
        grid.render(&mut self.out)?;

        self.out.execute_move_to(MoveTo(0, 0))?;
        write!(self.out, "Frame: {}  Catches: {}  (q to quit)", frame_count, catches)?;
        self.out.flush()?;

        if let OutputTarget::ScreenBuffer(sb) = &self.out {
            sb.print_to_log();
        }
        Ok(())
    }
}
