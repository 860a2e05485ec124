/*
| type      | state       | passes        | rejects          |
| --------- | ----------- | ------------- | ---------------- |
| low-pass  | acc         | slow changes  | fast changes     |
| high-pass | x - acc     | fast changes  | DC, slow changes |

The one-pole estimator tracks a running average of the input:

    acc = x * k + (1 - k) * acc        k = cutoff_amount / sample_rate

Subtracting that average from the input leaves the high-frequency part. The
main use here is removing the DC bias that full-wave rectification
(`AbsOctaveUp`) leaves behind.
*/

pub struct HighPass {
    k: f32,
    acc: f32,
}

impl HighPass {
    /// `k` is clamped to [0, 1]; outside that range the recursion diverges.
    pub fn new(sample_rate: f32, cutoff_amount: f32) -> Self {
        let k = if sample_rate > 0.0 {
            (cutoff_amount / sample_rate).clamp(0.0, 1.0)
        } else {
            0.0
        };
        Self { k, acc: 0.0 }
    }

    pub fn coefficient(&self) -> f32 {
        self.k
    }

    /// Current low-frequency estimate.
    pub fn estimate(&self) -> f32 {
        self.acc
    }

    #[inline]
    pub fn next_sample(&mut self, x: f32) -> f32 {
        self.acc = x * self.k + (1.0 - self.k) * self.acc;
        x - self.acc
    }

    pub fn render(&mut self, buffer: &mut [f32]) {
        for sample in buffer.iter_mut() {
            *sample = self.next_sample(*sample);
        }
    }

    pub fn reset(&mut self) {
        self.acc = 0.0;
    }
}
