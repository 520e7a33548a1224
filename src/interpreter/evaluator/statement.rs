use tracing::trace;

use crate::{
    ast::{Alternative, Assignment, Block, If, Statement, While},
    interpreter::{
        evaluator::core::{Context, EvalResult, VariableResolution},
        robot::Robot,
    },
};

impl Context {
    /// Executes a single statement.
    pub fn exec_statement(&mut self,
                          statement: &Statement,
                          robot: &mut dyn Robot)
                          -> EvalResult<()> {
        match statement {
            Statement::Action(action) => self.exec_action(action, robot),
            Statement::Loop(body) => self.exec_loop(body, robot),
            Statement::If(branch) => self.exec_if(branch, robot),
            Statement::While(While { condition, body }) => {
                while self.eval_condition(condition, robot)? {
                    self.consume_step()?;
                    self.exec_block(body, robot)?;
                }
                Ok(())
            },
            Statement::Assignment(assignment) => self.exec_assignment(assignment, robot),
        }
    }

    /// Executes the statements of a block in order.
    pub fn exec_block(&mut self, block: &Block, robot: &mut dyn Robot) -> EvalResult<()> {
        for statement in &block.statements {
            self.exec_statement(statement, robot)?;
        }
        Ok(())
    }

    /// Executes `body` over and over.
    ///
    /// There is no way out of a `loop` from inside the language: it ends only
    /// when an error propagates, such as a robot failure or an exhausted step
    /// budget.
    pub fn exec_loop(&mut self, body: &Block, robot: &mut dyn Robot) -> EvalResult<()> {
        loop {
            self.consume_step()?;
            self.exec_block(body, robot)?;
        }
    }

    /// Executes an `if` chain.
    ///
    /// The first branch whose condition holds runs and the rest of the chain
    /// is skipped without evaluating its conditions. If no condition holds,
    /// the trailing `else` block runs, if there is one.
    pub fn exec_if(&mut self, branch: &If, robot: &mut dyn Robot) -> EvalResult<()> {
        if self.eval_condition(&branch.condition, robot)? {
            return self.exec_block(&branch.then_block, robot);
        }

        match &branch.alternative {
            Some(Alternative::Elif(next)) => self.exec_if(next, robot),
            Some(Alternative::Else(block)) => self.exec_block(block, robot),
            None => Ok(()),
        }
    }

    /// Executes an assignment.
    ///
    /// With parse-time resolution the binding already happened while parsing
    /// and nothing is left to do. With runtime resolution the expression is
    /// evaluated now and its value replaces the variable's previous one.
    pub fn exec_assignment(&mut self,
                           assignment: &Assignment,
                           robot: &mut dyn Robot)
                           -> EvalResult<()> {
        match self.options.resolution {
            VariableResolution::ParseTime => {
                trace!(name = %assignment.name, "assignment already bound at parse time");
            },
            VariableResolution::Runtime => {
                let value = self.eval_expr(&assignment.value, robot)?;
                trace!(name = %assignment.name, value, "assigning variable");
                self.variables.insert(assignment.name.clone(), value);
            },
        }
        Ok(())
    }
}
