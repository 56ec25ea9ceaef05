use std::time::Duration;

use async_trait::async_trait;
use dioxus::logger::tracing::info;

use super::{HelperInput, ResponseProducer};
use crate::{AppSettings, error::HelperError, utils::sleep};

/// Canned analysis returned for every photo, whatever it shows.
pub const PHOTO_RESPONSE: &str = "I can see this is a math problem about fractions! Let me help you explain this to your child:

**What I see in the image:**
A worksheet with fraction addition problems.

**Simple Explanation for Your Child:**
Think of fractions like pizza slices!

🍕 **For 1/2 + 1/4:**
- 1/2 means half a pizza (2 out of 4 slices)
- 1/4 means one slice out of 4
- To add them: 2 slices + 1 slice = 3 slices out of 4
- Answer: 3/4

**Teaching Tips:**
1. Use visual aids like drawings or real objects
2. Let them draw circles and divide them into parts
3. Practice with familiar items (pizza, cake, etc.)
4. Be patient - fractions can be tricky!

**What to do next:**
Try more examples with the same denominator first, then move to different denominators when they're comfortable.";

fn text_response(question: &str) -> String {
    format!(
        "Great question! Let me break this down in a simple way for you and your child:

**Understanding the Problem:**
{question}

**Simple Explanation:**
This is a common topic that many children find challenging. Here's how you can explain it step by step:

1. Start with the basics - make sure your child understands the fundamental concept
2. Use real-world examples they can relate to
3. Break down the problem into smaller, manageable parts
4. Encourage them to try each step themselves

**Parent Tip:**
Be patient and encouraging. It's okay if they don't get it right away - learning takes time!

**Next Steps:**
- Practice with similar problems
- Ask their teacher for additional resources if needed
- Celebrate small wins to build confidence"
    )
}

/// Stands in for an inference service: waits a fixed delay, then answers
/// with a template chosen only by the kind of input.
#[derive(Debug, Clone)]
pub struct MockProducer {
    text_delay: Duration,
    photo_delay: Duration,
}

impl MockProducer {
    pub fn new(text_delay: Duration, photo_delay: Duration) -> Self {
        Self {
            text_delay,
            photo_delay,
        }
    }

    pub fn from_settings(settings: &AppSettings) -> Self {
        Self::new(settings.text_delay(), settings.photo_delay())
    }
}

#[async_trait(?Send)]
impl ResponseProducer for MockProducer {
    async fn produce(&self, input: HelperInput) -> Result<String, HelperError> {
        let delay = match &input {
            HelperInput::Image(_) => self.photo_delay,
            HelperInput::Text(_) => self.text_delay,
        };
        info!("producing {} response in {delay:?}", input.kind());
        sleep(delay).await;
        let response = match input {
            HelperInput::Image(_) => PHOTO_RESPONSE.to_string(),
            HelperInput::Text(question) => text_response(&question),
        };
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use tokio::time::Instant;

    use super::*;
    use crate::intake::photo::placeholder_capture;

    fn producer() -> MockProducer {
        MockProducer::from_settings(&AppSettings::default())
    }

    #[tokio::test(start_paused = true)]
    async fn text_answer_quotes_the_question_after_two_seconds() {
        let start = Instant::now();
        let r = producer()
            .produce(HelperInput::Text("What is 7 x 8?".into()))
            .await
            .unwrap();
        assert!(start.elapsed() >= Duration::from_millis(2_000));
        assert!(start.elapsed() < Duration::from_millis(3_000));
        assert!(r.starts_with("Great question!"));
        assert!(r.contains("**Understanding the Problem:**\nWhat is 7 x 8?\n"));
    }

    #[tokio::test(start_paused = true)]
    async fn photo_answer_ignores_the_image() {
        let start = Instant::now();
        let r = producer()
            .produce(HelperInput::Image(placeholder_capture()))
            .await
            .unwrap();
        assert!(start.elapsed() >= Duration::from_millis(3_000));
        assert_eq!(r, PHOTO_RESPONSE);
    }
}
