use crate::domain::card::Rank;
use crate::engine::RandomSource;

/// Системный RNG (thread_rng) для обычной игры.
#[derive(Clone, Debug, Default)]
pub struct SystemRng;

impl RandomSource for SystemRng {
    fn index_below(&mut self, upper: usize) -> usize {
        use rand::Rng;

        if upper == 0 {
            return 0;
        }
        rand::thread_rng().gen_range(0..upper)
    }
}

/// Детерминированный RNG для тестов и реплея.
/// Позволяет воспроизводить одни и те же сдачи при одинаковом seed.
#[derive(Clone, Debug)]
pub struct DeterministicRng {
    inner: rand::rngs::StdRng,
}

impl DeterministicRng {
    pub fn from_seed(seed: u64) -> Self {
        use rand::SeedableRng;
        Self {
            inner: rand::rngs::StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for DeterministicRng {
    fn index_below(&mut self, upper: usize) -> usize {
        use rand::Rng;

        if upper == 0 {
            return 0;
        }
        self.inner.gen_range(0..upper)
    }
}

/// "Подтасованная" колода: отдаёт заранее заданные ранги по кругу.
///
/// Порядок вытягивания в раунде: сначала игрок, потом компьютер.
#[derive(Clone, Debug, Default)]
pub struct ScriptedRng {
    indices: Vec<usize>,
    pos: usize,
}

impl ScriptedRng {
    pub fn from_ranks(ranks: &[Rank]) -> Self {
        Self {
            indices: ranks.iter().map(|r| r.index()).collect(),
            pos: 0,
        }
    }

    /// Удобный конструктор: пары (карта игрока, карта компьютера) по раундам.
    pub fn from_rounds(rounds: &[(Rank, Rank)]) -> Self {
        let ranks: Vec<Rank> = rounds.iter().flat_map(|&(p, c)| [p, c]).collect();
        Self::from_ranks(&ranks)
    }

    /// Сколько вытягиваний уже сделано.
    pub fn draws(&self) -> usize {
        self.pos
    }
}

impl RandomSource for ScriptedRng {
    fn index_below(&mut self, upper: usize) -> usize {
        if self.indices.is_empty() || upper == 0 {
            return 0;
        }
        let idx = self.indices[self.pos % self.indices.len()];
        self.pos += 1;
        idx % upper
    }
}
