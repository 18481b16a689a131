use crate::error::{Error, Result};
use crate::geometry::Position;
use crate::map::{parse_map, Map};
use crate::playback::{PlaybackConfig, PlaybackEngine, TickEvent};
use crate::solution::{parse_solution, Solution};
use std::fs;
use std::io::Read;
use std::path::Path;

/// Everything a renderer needs for one map/solution pair
///
/// Loading never fails: a parse error is kept as a message instead of a
/// model so it can be displayed. A solution is only present when the map is.
#[derive(Clone, Debug)]
pub struct Scene {
    map: Option<Map>,
    solution: Option<Solution>,
    error: Option<String>,
    engine: PlaybackEngine,
}

impl Scene {
    /// Parse both inputs with the default clock
    pub fn load(map_src: &str, solution_src: &str) -> Self {
        Self::load_with_config(map_src, solution_src, PlaybackConfig::default())
    }

    pub fn load_with_config(map_src: &str, solution_src: &str, config: PlaybackConfig) -> Self {
        let engine = PlaybackEngine::new(config);

        let map = match parse_map(map_src) {
            Ok(map) => map,
            Err(e) => return Self::errored(None, Error::from(e), engine),
        };
        match parse_solution(solution_src, &map) {
            Ok(solution) => Self {
                map: Some(map),
                solution: Some(solution),
                error: None,
                engine,
            },
            Err(e) => Self::errored(Some(map), Error::from(e), engine),
        }
    }

    /// Read a map file and a solution file, then load them
    ///
    /// Only I/O failures are returned; parse errors stay inside the scene.
    pub fn read_files(
        map_path: impl AsRef<Path>,
        solution_path: impl AsRef<Path>,
        config: PlaybackConfig,
    ) -> Result<Self> {
        let map_src = fs::read_to_string(map_path)?;
        let solution_src = fs::read_to_string(solution_path)?;
        Ok(Self::load_with_config(&map_src, &solution_src, config))
    }

    /// Read combined lem-in output (map, then moves) and load it
    pub fn read_combined<R: Read>(mut reader: R, config: PlaybackConfig) -> Result<Self> {
        let mut buf = String::new();
        reader.read_to_string(&mut buf)?;
        let (map_src, solution_src) = split_combined_input(&buf);
        Ok(Self::load_with_config(map_src, solution_src, config))
    }

    fn errored(map: Option<Map>, err: Error, engine: PlaybackEngine) -> Self {
        Self {
            map,
            solution: None,
            error: Some(err.to_string()),
            engine,
        }
    }

    #[inline]
    pub fn map(&self) -> Option<&Map> {
        self.map.as_ref()
    }

    #[inline]
    pub fn solution(&self) -> Option<&Solution> {
        self.solution.as_ref()
    }

    /// Human readable parse failure, if any
    #[inline]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    #[inline]
    pub fn engine(&self) -> &PlaybackEngine {
        &self.engine
    }

    #[inline]
    pub fn engine_mut(&mut self) -> &mut PlaybackEngine {
        &mut self.engine
    }

    /// Advance playback; without a solution nothing moves
    pub fn tick(&mut self) -> TickEvent {
        match &self.solution {
            Some(solution) => self.engine.tick(solution),
            None => TickEvent::Frozen,
        }
    }

    /// Current ant positions, empty when the solution errored
    #[inline]
    pub fn positions(&self) -> &[Position] {
        if self.solution.is_some() {
            self.engine.positions()
        } else {
            &[]
        }
    }
}

/// Split combined lem-in output into map text and solution text
///
/// The solution starts at the first line beginning with `L`.
pub fn split_combined_input(src: &str) -> (&str, &str) {
    let mut offset = 0;
    for line in src.split_inclusive('\n') {
        if line.starts_with('L') {
            return (&src[..offset], &src[offset..]);
        }
        offset += line.len();
    }
    (src, "")
}
